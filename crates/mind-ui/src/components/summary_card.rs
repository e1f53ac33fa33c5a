use leptos::prelude::*;

/// Card with a title and one large number.
#[component]
pub fn SummaryCard(
    #[prop(into)] title: String,
    value: u32,
    /// Optional accent colour for the number.
    #[prop(optional)]
    accent: Option<&'static str>,
) -> impl IntoView {
    let style = accent.map(|color| format!("color: {color}"));

    view! {
        <div class="card summary-card">
            <div class="card-title">{title}</div>
            <div class="summary-value" style=style>{value}</div>
        </div>
    }
}
