use leptos::prelude::*;
use mind_types::admin::{departments, ExportRequest, UserFilter};
use mind_types::{format_timestamp, Status, UserStatus};

use crate::components::status_badge::StatusBadge;
use crate::components::toast::use_toast;

const ALL: &str = "all";

/// Latest status per user with client-side filters and CSV export.
#[component]
pub fn UserStatusTable(users: Vec<UserStatus>) -> impl IntoView {
    let departmentOptions = departments(&users);
    let total = users.len();
    let users = StoredValue::new(users);

    let filter = RwSignal::new(UserFilter::default());
    let (showRange, setShowRange) = signal(false);
    let (startDate, setStartDate) = signal(String::new());
    let (endDate, setEndDate) = signal(String::new());
    #[allow(unused_variables)]
    let toast = use_toast();

    let visible = Memo::new(move |_| {
        filter.with(|f| users.with_value(|all| f.apply(all).into_iter().cloned().collect::<Vec<_>>()))
    });

    let export = move |useRange: bool| {
        let (start, end) = if useRange {
            (startDate.get_untracked(), endDate.get_untracked())
        } else {
            (String::new(), String::new())
        };
        let request = ExportRequest {
            start_date: start,
            end_date: end,
            filter: filter.get_untracked(),
        };

        #[cfg(feature = "hydrate")]
        wasm_bindgen_futures::spawn_local(async move {
            use crate::api::{self, download::save_file};

            let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
            let saved = match api::export_csv(&request).await {
                Ok(bytes) => save_file(&bytes, &request.filename(&today), "text/csv"),
                Err(e) => Err(e.user_message("CSV export failed.")),
            };
            match saved {
                Ok(()) => {
                    setShowRange.set(false);
                    setStartDate.set(String::new());
                    setEndDate.set(String::new());
                }
                Err(message) => {
                    leptos::logging::error!("export failed: {message}");
                    toast.error("CSV export failed.");
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <section class="card users-card">
            <div class="card-header">
                <div class="card-title">"All users"</div>
                <div class="export-controls">
                    <button type="button" class="btn btn-secondary" on:click=move |_| setShowRange.update(|v| *v = !*v)>
                        "Export date range"
                    </button>
                    <button type="button" class="btn btn-primary" on:click=move |_| export(false)>
                        "Export latest CSV"
                    </button>
                </div>
            </div>

            <Show when=move || showRange.get()>
                <div class="date-range">
                    <label>
                        "From "
                        <input
                            type="date"
                            prop:value=startDate
                            on:input=move |ev| setStartDate.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "To "
                        <input
                            type="date"
                            prop:value=endDate
                            on:input=move |ev| setEndDate.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        type="button"
                        class="btn btn-primary"
                        prop:disabled=move || startDate.get().is_empty() || endDate.get().is_empty()
                        on:click=move |_| export(true)
                    >
                        "Export range"
                    </button>
                </div>
            </Show>

            <div class="filters">
                <label>
                    "Department "
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.department = (value != ALL).then_some(value));
                    }>
                        <option value=ALL>"All"</option>
                        {departmentOptions
                            .into_iter()
                            .map(|d| view! { <option value=d.clone()>{d.clone()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Status "
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.status = Status::parse(&value));
                    }>
                        <option value=ALL>"All"</option>
                        {Status::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search by name"
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.search = value);
                    }
                />
                <span class="filter-count">{move || format!("{} / {total}", visible.with(Vec::len))}</span>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Department"</th>
                        <th>"Status"</th>
                        <th>"Comment"</th>
                        <th>"Last recorded"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || visible.get() key=|user| user.id.clone() let:user>
                        <tr>
                            <td>
                                <div class="user-name">{user.full_name.clone()}</div>
                                <div class="user-email">{user.email.clone()}</div>
                            </td>
                            <td>{user.department.clone()}</td>
                            <td><StatusBadge status=user.latest_status /></td>
                            <td class="comment-cell">{user.latest_comment.clone().unwrap_or_default()}</td>
                            <td>
                                {user
                                    .latest_date
                                    .as_deref()
                                    .map(format_timestamp)
                                    .unwrap_or_else(|| "-".to_string())}
                            </td>
                        </tr>
                    </For>
                </tbody>
            </table>
        </section>
    }
}
