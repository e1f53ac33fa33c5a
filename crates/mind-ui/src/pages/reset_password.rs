use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use mind_types::password::validate_new_password;

use crate::components::loading::Loading;

#[derive(Clone, Debug, PartialEq)]
enum ResetState {
    Verifying,
    Invalid(String),
    Ready,
    Done,
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let params = use_params_map();
    let token = Memo::new(move |_| params.with(|p| p.get("token")).unwrap_or_default());

    #[allow(unused_variables)]
    let state = RwSignal::new(ResetState::Verifying);
    let (password, setPassword) = signal(String::new());
    let (confirmation, setConfirmation) = signal(String::new());
    let (error, setError) = signal(Option::<String>::None);
    #[allow(unused_variables)]
    let (saving, setSaving) = signal(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let token = token.get();
        state.set(ResetState::Verifying);
        wasm_bindgen_futures::spawn_local(async move {
            match crate::api::verify_invite(&token).await {
                Ok(_) => state.set(ResetState::Ready),
                Err(e) => state.set(ResetState::Invalid(
                    e.user_message("This reset link is invalid or has expired."),
                )),
            }
        });
    });

    #[allow(unused_variables)]
    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();
        setError.set(None);

        let newPassword = password.get_untracked();
        if let Err(e) = validate_new_password(&newPassword, &confirmation.get_untracked()) {
            setError.set(Some(e.to_string()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use mind_types::TokenPassword;

            let request = TokenPassword {
                token: token.get_untracked(),
                password: newPassword,
            };
            setSaving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::reset_password(&request).await {
                    Ok(()) => state.set(ResetState::Done),
                    Err(e) => setError.set(Some(e.user_message("Failed to reset the password."))),
                }
                setSaving.set(false);
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                {move || match state.get() {
                    ResetState::Verifying => view! { <Loading message="Checking your link..." /> }.into_any(),
                    ResetState::Invalid(message) => {
                        view! {
                            <h2>"Link problem"</h2>
                            <p class="form-error">{message}</p>
                            <a href="/forgot-password" class="btn btn-secondary">"Request a new link"</a>
                        }
                            .into_any()
                    }
                    ResetState::Done => {
                        view! {
                            <div class="auth-header">
                                <h1>"Password updated"</h1>
                                <p>"You can now log in with your new password."</p>
                            </div>
                            <a href="/login" class="btn btn-primary">"Go to login"</a>
                        }
                            .into_any()
                    }
                    ResetState::Ready => {
                        view! {
                            <div class="auth-header">
                                <h1>"Choose a new password"</h1>
                            </div>
                            {move || error.get().map(|message| view! { <div class="form-error">{message}</div> })}
                            <form on:submit=onSubmit>
                                <div class="form-group">
                                    <label for="password">"New password"</label>
                                    <input
                                        type="password"
                                        id="password"
                                        required
                                        prop:value=password
                                        on:input=move |ev| setPassword.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="confirmation">"Confirm password"</label>
                                    <input
                                        type="password"
                                        id="confirmation"
                                        required
                                        prop:value=confirmation
                                        on:input=move |ev| setConfirmation.set(event_target_value(&ev))
                                    />
                                </div>
                                <button type="submit" class="btn btn-primary" prop:disabled=saving>
                                    {move || if saving.get() { "Saving..." } else { "Reset password" }}
                                </button>
                            </form>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
