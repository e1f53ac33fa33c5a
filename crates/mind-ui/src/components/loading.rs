use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            {message}
        </div>
    }
}
