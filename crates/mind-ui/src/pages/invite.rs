use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use mind_types::password::validate_new_password;
use mind_types::InviteInfo;

use crate::components::loading::Loading;
use crate::components::toast::use_toast;

/// First-time password setup reached from an invitation link. Always
/// rendered without a session.
#[component]
pub fn InvitePage() -> impl IntoView {
    let params = use_params_map();
    let token = Memo::new(move |_| params.with(|p| p.get("token")).unwrap_or_default());

    #[allow(unused_variables)]
    let (invite, setInvite) = signal(Option::<Result<InviteInfo, String>>::None);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let token = token.get();
        setInvite.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::api::verify_invite(&token)
                .await
                .map_err(|e| e.user_message("Could not verify the invitation."));
            setInvite.set(Some(result));
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                {move || match invite.get() {
                    None => view! { <Loading message="Checking your invitation..." /> }.into_any(),
                    Some(Err(e)) => {
                        view! {
                            <h2>"Invitation problem"</h2>
                            <p class="form-error">{e}</p>
                            <a href="/login" class="btn btn-secondary">"Back to login"</a>
                        }
                            .into_any()
                    }
                    Some(Ok(info)) => view! { <SetPasswordForm info token /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn SetPasswordForm(info: InviteInfo, token: Memo<String>) -> impl IntoView {
    let (password, setPassword) = signal(String::new());
    let (confirmation, setConfirmation) = signal(String::new());
    let (error, setError) = signal(Option::<String>::None);
    #[allow(unused_variables)]
    let (saving, setSaving) = signal(false);
    #[allow(unused_variables)]
    let navigate = use_navigate();
    #[allow(unused_variables)]
    let toast = use_toast();

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
            use mind_types::guard::LOGIN_PATH;
            use mind_types::TokenPassword;

            let request = TokenPassword {
                token: token.get_untracked(),
                password: newPassword,
            };
            let navigate = navigate.clone();
            setSaving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::set_password_with_invite(&request).await {
                    Ok(()) => {
                        toast.success("Password set. Please log in.");
                        navigate(LOGIN_PATH, Default::default());
                    }
                    Err(e) => {
                        setError.set(Some(e.user_message("Failed to set the password.")));
                        setSaving.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="auth-header">
            <h1>"Welcome to Mind Status"</h1>
            <p>{format!("Hello {}, choose a password to finish setting up your account.", info.user.full_name)}</p>
            <p class="muted">{info.user.email}</p>
        </div>

        {move || error.get().map(|message| view! { <div class="form-error">{message}</div> })}

        <form on:submit=onSubmit>
            <div class="form-group">
                <label for="password">"Password"</label>
                <input
                    type="password"
                    id="password"
                    required
                    prop:value=password
                    on:input=move |ev| setPassword.set(event_target_value(&ev))
                />
                <small class="hint">"At least 8 characters with upper and lower case letters and a digit."</small>
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
                {move || if saving.get() { "Saving..." } else { "Set password" }}
            </button>
        </form>
    }
}
