use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use mind_types::guard::LOGIN_PATH;

use crate::session::use_session;

/// Top bar for signed-in pages: brand, an optional subtitle, the links
/// passed as children and a logout button.
#[component]
pub fn AppHeader(
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let logout = move |_| {
        session.logout();
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <header class="app-header">
            <div class="brand">
                <div class="brand-icon">"M"</div>
                <span class="brand-text">"Mind Status"</span>
                {subtitle.map(|s| view! { <span class="brand-subtitle">{s}</span> })}
            </div>
            <nav class="header-links">
                {children.map(|c| c())}
                <button type="button" class="btn btn-ghost" on:click=logout>
                    "Log out"
                </button>
            </nav>
        </header>
    }
}
