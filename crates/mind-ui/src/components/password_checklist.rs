use leptos::prelude::*;
use mind_types::password::PasswordChecks;

/// Live list of password requirements, ticked as they pass.
#[component]
pub fn PasswordChecklist(#[prop(into)] checks: Signal<PasswordChecks>) -> impl IntoView {
    view! {
        <ul class="password-checklist">
            {move || {
                checks
                    .get()
                    .items()
                    .into_iter()
                    .map(|(label, passed)| {
                        let class = if passed { "check passed" } else { "check" };
                        let mark = if passed { "\u{2713}" } else { "\u{25CB}" };
                        view! {
                            <li class=class>
                                <span class="check-mark">{mark}</span>
                                {label}
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}
