use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use mind_types::ApiError;

use crate::session::use_session;

fn login_error_message(error: &ApiError) -> &'static str {
    if error.is_unauthorized() {
        "Invalid email or password."
    } else {
        "Login failed. Please try again."
    }
}

/// Exchanges credentials for tokens, stores them and resolves the role.
#[cfg(feature = "hydrate")]
async fn sign_in(request: &mind_types::LoginRequest) -> Result<mind_types::Role, ApiError> {
    use mind_types::session::{finish, CredentialStore, SessionPhase};

    use crate::api::{self, BrowserStore};

    let tokens = api::login(request).await?;
    BrowserStore.store_tokens(&tokens.access, &tokens.refresh);

    let user = api::fetch_current_user(&tokens.access).await;
    match finish(&BrowserStore, user) {
        SessionPhase::Authenticated(role) => Ok(role),
        _ => Err(ApiError::Decode("account has no role".into())),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, setEmail) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    #[allow(unused_variables)]
    let (error, setError) = signal(Option::<String>::None);
    #[allow(unused_variables)]
    let (pending, setPending) = signal(false);

    #[allow(unused_variables)]
    let session = use_session();
    #[allow(unused_variables)]
    let navigate = use_navigate();

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            use mind_types::guard::home_for;
            use mind_types::session::SessionPhase;
            use mind_types::LoginRequest;
            use wasm_bindgen_futures::spawn_local;

            let request = LoginRequest {
                email: email.get_untracked().trim().to_string(),
                password: password.get_untracked(),
            };
            let navigate = navigate.clone();
            setError.set(None);
            setPending.set(true);

            spawn_local(async move {
                match sign_in(&request).await {
                    Ok(role) => {
                        let home = home_for(&SessionPhase::Authenticated(role.clone()));
                        session.sign_in(role);
                        navigate(home, Default::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        setError.set(Some(login_error_message(&e).to_string()));
                    }
                }
                setPending.set(false);
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-header">
                    <div class="auth-icon">"M"</div>
                    <h1>"Mind Status"</h1>
                    <p>"Mental health check-in"</p>
                </div>

                {move || error.get().map(|message| view! { <div class="form-error">{message}</div> })}

                <form on:submit=onSubmit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.com"
                            required
                            prop:value=email
                            prop:disabled=pending
                            on:input=move |ev| setEmail.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter your password"
                            required
                            prop:value=password
                            prop:disabled=pending
                            on:input=move |ev| setPassword.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" prop:disabled=pending>
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="auth-footer">
                    <a href="/forgot-password">"Forgot your password?"</a>
                    <a href="/admin/register">"Register an organisation"</a>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_credentials_get_their_own_message() {
        assert_eq!(
            login_error_message(&ApiError::Unauthorized),
            "Invalid email or password."
        );
        assert_eq!(
            login_error_message(&ApiError::Network("offline".into())),
            "Login failed. Please try again."
        );
    }
}
