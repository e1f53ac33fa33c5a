//! Reactive session state and the route guard built on it.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use mind_types::guard::{decide, Access, AppRoute};
use mind_types::session::SessionPhase;
use mind_types::Role;

use crate::components::loading::Loading;

#[derive(Clone, Copy)]
pub struct SessionContext {
    phase: RwSignal<SessionPhase>,
}

impl SessionContext {
    pub fn phase(&self) -> SessionPhase {
        self.phase.get()
    }

    pub fn sign_in(&self, role: Role) {
        self.phase.set(SessionPhase::Authenticated(role));
    }

    /// Forgets stored credentials and drops to the anonymous phase.
    pub fn logout(&self) {
        #[cfg(feature = "hydrate")]
        {
            use mind_types::session::CredentialStore;
            crate::api::BrowserStore.clear();
        }
        self.phase.set(SessionPhase::Anonymous);
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Owns the session phase. Starts in `Checking` on both server and client;
/// the stored token is checked once the app is running in the browser.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let phase = RwSignal::new(SessionPhase::Checking);
    provide_context(SessionContext { phase });

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use mind_types::session::{begin, finish, Startup};
        use wasm_bindgen_futures::spawn_local;

        use crate::api::{self, BrowserStore};

        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();

        match begin(&BrowserStore, &path) {
            Startup::Anonymous => phase.set(SessionPhase::Anonymous),
            Startup::Verify { token } => spawn_local(async move {
                let result = api::fetch_current_user(&token).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("session check failed: {e}");
                }
                phase.set(finish(&BrowserStore, result));
            }),
        }
    });

    children()
}

/// Renders `children` only when the session allows `route`.
#[component]
pub fn Guard(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    Effect::new(move |_| {
        if decide(route, &session.phase()) == Access::Logout {
            session.logout();
        }
    });

    move || match decide(route, &session.phase()) {
        Access::Render => children().into_any(),
        Access::Pending | Access::Logout => {
            view! { <Loading message="Checking session..." /> }.into_any()
        }
        Access::Redirect(path) => view! { <Redirect path /> }.into_any(),
    }
}
