use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use mind_types::guard::home_for;
use mind_types::password::validate_new_password;

use crate::components::header::AppHeader;
use crate::session::use_session;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let session = use_session();
    let (current, setCurrent) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    let (confirmation, setConfirmation) = signal(String::new());
    let (error, setError) = signal(Option::<String>::None);
    #[allow(unused_variables)]
    let (saving, setSaving) = signal(false);
    #[allow(unused_variables)]
    let (done, setDone) = signal(false);

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
            use mind_types::ChangePassword;

            let request = ChangePassword {
                current_password: current.get_untracked(),
                new_password: newPassword,
            };
            setSaving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::change_password(&request).await {
                    Ok(()) => setDone.set(true),
                    Err(e) => setError.set(Some(e.user_message("Failed to change the password."))),
                }
                setSaving.set(false);
            });
        }
    };

    let home = move || home_for(&session.phase());

    view! {
        <AppHeader>
            <a href=home class="header-link">"Back"</a>
        </AppHeader>
        <main class="page narrow">
            <section class="card">
                <Show
                    when=move || !done.get()
                    fallback=move || {
                        view! {
                            <div class="card-title">"Password changed"</div>
                            <p>"Your password has been updated."</p>
                            <a href=home class="btn btn-primary">"Back to dashboard"</a>
                        }
                    }
                >
                    <div class="card-title">"Change password"</div>
                    {move || error.get().map(|message| view! { <div class="form-error">{message}</div> })}
                    <form on:submit=onSubmit>
                        <div class="form-group">
                            <label for="current">"Current password"</label>
                            <input
                                type="password"
                                id="current"
                                required
                                prop:value=current
                                on:input=move |ev| setCurrent.set(event_target_value(&ev))
                            />
                        </div>
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
                            <label for="confirmation">"Confirm new password"</label>
                            <input
                                type="password"
                                id="confirmation"
                                required
                                prop:value=confirmation
                                on:input=move |ev| setConfirmation.set(event_target_value(&ev))
                            />
                        </div>
                        <button type="submit" class="btn btn-primary" prop:disabled=saving>
                            {move || if saving.get() { "Saving..." } else { "Change password" }}
                        </button>
                    </form>
                </Show>
            </section>
        </main>
    }
}
