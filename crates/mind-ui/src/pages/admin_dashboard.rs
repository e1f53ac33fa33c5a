use leptos::prelude::*;
use mind_types::{format_timestamp, Alert, DashboardSummary, UserStatus};

use crate::components::distribution_chart::DistributionChart;
use crate::components::header::AppHeader;
use crate::components::loading::Loading;
use crate::components::status_badge::StatusBadge;
use crate::components::summary_card::SummaryCard;
use crate::components::trend_chart::TrendPanel;
use crate::pages::bulk_upload::BulkUpload;
use crate::pages::user_management::UserManagement;
use crate::pages::user_table::UserStatusTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AdminTab {
    Overview,
    Users,
    BulkUpload,
}

impl AdminTab {
    const ALL: [AdminTab; 3] = [AdminTab::Overview, AdminTab::Users, AdminTab::BulkUpload];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Dashboard",
            AdminTab::Users => "Users",
            AdminTab::BulkUpload => "Bulk upload",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Overview {
    summary: DashboardSummary,
    alerts: Vec<Alert>,
    users: Vec<UserStatus>,
}

#[cfg(feature = "hydrate")]
async fn load_overview() -> Result<Overview, mind_types::ApiError> {
    use crate::api;

    Ok(Overview {
        summary: api::dashboard_summary().await?,
        alerts: api::alerts().await?,
        users: api::user_statuses().await?,
    })
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let tab = RwSignal::new(AdminTab::Overview);

    view! {
        <AppHeader subtitle="Admin">
            <a href="/change-password" class="header-link">"Change password"</a>
        </AppHeader>
        <main class="page">
            <div class="tabs">
                {AdminTab::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                type="button"
                                class=move || if tab.get() == option { "tab active" } else { "tab" }
                                on:click=move |_| tab.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || match tab.get() {
                AdminTab::Overview => view! { <OverviewTab /> }.into_any(),
                AdminTab::Users => view! { <UserManagement /> }.into_any(),
                AdminTab::BulkUpload => view! { <BulkUpload /> }.into_any(),
            }}
        </main>
    }
}

#[component]
fn OverviewTab() -> impl IntoView {
    #[allow(unused_variables)]
    let (overview, setOverview) = signal(Option::<Result<Overview, String>>::None);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            let result = load_overview()
                .await
                .map_err(|e| e.user_message("Failed to load dashboard data"));
            setOverview.set(Some(result));
        });
    });

    move || match overview.get() {
        None => view! { <Loading message="Loading dashboard..." /> }.into_any(),
        Some(Err(e)) => view! { <div class="card"><p class="form-error">{e}</p></div> }.into_any(),
        Some(Ok(data)) => view! { <OverviewContent data /> }.into_any(),
    }
}

#[component]
fn OverviewContent(data: Overview) -> impl IntoView {
    let Overview {
        summary,
        alerts,
        users,
    } = data;

    view! {
        <div class="summary-grid">
            <SummaryCard title="Registered users" value=summary.total_users />
            <SummaryCard title="Recorded today" value=summary.today_recorded />
            <SummaryCard title="Red alerts" value=summary.red_alerts accent="#EF4444" />
        </div>

        <div class="dashboard-grid">
            <section class="card">
                <div class="card-title">"Today's distribution"</div>
                <DistributionChart distribution=summary.status_distribution />
            </section>
            <AlertList alerts />
        </div>

        <TrendPanel />

        <UserStatusTable users />
    }
}

#[component]
fn AlertList(alerts: Vec<Alert>) -> impl IntoView {
    let count = alerts.len();

    view! {
        <section class="card alerts-card">
            <div class="card-title">{format!("Alerts ({count})")}</div>
            {if alerts.is_empty() {
                view! { <p class="empty-state">"No alerts."</p> }.into_any()
            } else {
                view! {
                    <ul class="alert-list">
                        {alerts
                            .into_iter()
                            .map(|alert| {
                                let hasComment = !alert.comment.is_empty();
                                view! {
                                    <li class="alert-item">
                                        <div class="alert-header">
                                            <strong>{alert.user_name}</strong>
                                            <span class="alert-dept">{alert.department}</span>
                                            <StatusBadge status=alert.status />
                                        </div>
                                        {hasComment
                                            .then(|| view! { <p class="alert-comment">{alert.comment}</p> })}
                                        <span class="alert-time">{format_timestamp(&alert.created_at)}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}
