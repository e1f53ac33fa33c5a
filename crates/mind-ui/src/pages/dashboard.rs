use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use mind_types::{format_timestamp, Status, StatusLog};

use crate::components::header::AppHeader;
use crate::components::loading::Loading;
use crate::components::status_badge::StatusBadge;
use crate::components::toast::use_toast;

/// Daily check-in for a regular user plus their own history.
#[component]
pub fn DashboardPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (logs, setLogs) = signal(Option::<Result<Vec<StatusLog>, String>>::None);
    let (selected, setSelected) = signal(Status::Green);
    let (comment, setComment) = signal(String::new());
    #[allow(unused_variables)]
    let (submitting, setSubmitting) = signal(false);

    #[cfg(feature = "hydrate")]
    let refresh = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::api::status_logs()
                .await
                .map_err(|e| e.user_message("Failed to load your history"));
            setLogs.set(Some(result));
        });
    };

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| refresh());

    #[allow(unused_variables)]
    let toast = use_toast();
    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            use mind_types::NewStatusLog;

            let entry = NewStatusLog {
                status: selected.get_untracked(),
                comment: comment.get_untracked().trim().to_string(),
            };
            setSubmitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::submit_status(&entry).await {
                    Ok(()) => {
                        setComment.set(String::new());
                        toast.success("Status recorded.");
                        refresh();
                    }
                    Err(e) => toast.error(e.user_message("Failed to record your status.")),
                }
                setSubmitting.set(false);
            });
        }
    };

    view! {
        <AppHeader>
            <a href="/change-password" class="header-link">"Change password"</a>
        </AppHeader>
        <main class="page">
            <section class="card">
                <div class="card-title">"How are you today?"</div>
                <form on:submit=onSubmit class="status-form">
                    <div class="status-buttons">
                        {Status::ALL
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            let active = if selected.get() == status { " active" } else { "" };
                                            format!("status-btn status-{}{active}", status.as_str().to_lowercase())
                                        }
                                        style=format!("--status-color: {}", status.color())
                                        on:click=move |_| setSelected.set(status)
                                    >
                                        <span class="status-icon">{status.icon()}</span>
                                        <span>{status.label()}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="form-group">
                        <label for="comment">"Comment (optional)"</label>
                        <textarea
                            id="comment"
                            rows="4"
                            placeholder="How are you feeling?"
                            prop:value=comment
                            on:input=move |ev| setComment.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button type="submit" class="btn btn-primary" prop:disabled=submitting>
                        {move || if submitting.get() { "Saving..." } else { "Record status" }}
                    </button>
                </form>
            </section>

            <section class="card">
                <div class="card-title">"History"</div>
                {move || match logs.get() {
                    None => view! { <Loading message="Loading history..." /> }.into_any(),
                    Some(Err(e)) => view! { <p class="form-error">{e}</p> }.into_any(),
                    Some(Ok(logs)) if logs.is_empty() => {
                        view! { <p class="empty-state">"Nothing recorded yet."</p> }.into_any()
                    }
                    Some(Ok(logs)) => view! { <StatusHistory logs /> }.into_any(),
                }}
            </section>
        </main>
    }
}

#[component]
fn StatusHistory(mut logs: Vec<StatusLog>) -> impl IntoView {
    logs.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    view! {
        <ul class="status-list">
            {logs
                .into_iter()
                .map(|log| {
                    let hasComment = !log.comment.is_empty();
                    view! {
                        <li class="status-item">
                            <div class="status-item-header">
                                <StatusBadge status=Some(log.status) />
                                <span class="status-date">{format_timestamp(&log.created_at)}</span>
                            </div>
                            {hasComment.then(|| view! { <p class="status-comment">{log.comment}</p> })}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
