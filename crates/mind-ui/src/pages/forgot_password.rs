use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let (email, setEmail) = signal(String::new());
    #[allow(unused_variables)]
    let (sent, setSent) = signal(false);
    #[allow(unused_variables)]
    let (error, setError) = signal(Option::<String>::None);
    #[allow(unused_variables)]
    let (sending, setSending) = signal(false);

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            use mind_types::PasswordResetRequest;

            let request = PasswordResetRequest {
                email: email.get_untracked().trim().to_string(),
            };
            setError.set(None);
            setSending.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::request_password_reset(&request).await {
                    Ok(()) => setSent.set(true),
                    Err(e) => setError.set(Some(e.user_message("Failed to send the reset email."))),
                }
                setSending.set(false);
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <Show
                    when=move || !sent.get()
                    fallback=move || {
                        view! {
                            <div class="auth-header">
                                <h1>"Check your inbox"</h1>
                                <p>
                                    {move || format!("If an account exists for {}, a reset link is on its way.", email.get())}
                                </p>
                            </div>
                            <a href="/login" class="btn btn-secondary">"Back to login"</a>
                        }
                    }
                >
                    <div class="auth-header">
                        <h1>"Reset your password"</h1>
                        <p>"Enter your email and we will send you a reset link."</p>
                    </div>
                    {move || error.get().map(|message| view! { <div class="form-error">{message}</div> })}
                    <form on:submit=onSubmit>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                required
                                prop:value=email
                                on:input=move |ev| setEmail.set(event_target_value(&ev))
                            />
                        </div>
                        <button type="submit" class="btn btn-primary" prop:disabled=sending>
                            {move || if sending.get() { "Sending..." } else { "Send reset link" }}
                        </button>
                    </form>
                    <div class="auth-footer">
                        <a href="/login">"Back to login"</a>
                    </div>
                </Show>
            </div>
        </div>
    }
}
