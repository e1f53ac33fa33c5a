use leptos::prelude::*;
use mind_types::{status_color, status_label, Status};

/// Coloured pill with the status label; grey "Not recorded" when absent.
#[component]
pub fn StatusBadge(status: Option<Status>) -> impl IntoView {
    view! {
        <span class="status-badge" style=format!("background-color: {}", status_color(status))>
            {status_label(status)}
        </span>
    }
}
