pub mod distribution_chart;
pub mod header;
pub mod loading;
pub mod password_checklist;
pub mod status_badge;
pub mod summary_card;
pub mod toast;
pub mod trend_chart;
