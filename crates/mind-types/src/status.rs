use chrono::{DateTime, Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Self-reported condition for a single day.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    #[default]
    Green,
    Yellow,
    Red,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Green, Status::Yellow, Status::Red];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Green => "GREEN",
            Status::Yellow => "YELLOW",
            Status::Red => "RED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "GREEN" => Some(Status::Green),
            "YELLOW" => Some(Status::Yellow),
            "RED" => Some(Status::Red),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Green => "Healthy",
            Status::Yellow => "Caution",
            Status::Red => "Warning",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Status::Green => "#10B981",
            Status::Yellow => "#F59E0B",
            Status::Red => "#EF4444",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Status::Green => "\u{1F60A}",
            Status::Yellow => "\u{1F610}",
            Status::Red => "\u{1F61E}",
        }
    }
}

/// Label for an optional status, as shown in admin tables.
pub fn status_label(status: Option<Status>) -> &'static str {
    status.map(|s| s.label()).unwrap_or("Not recorded")
}

pub fn status_color(status: Option<Status>) -> &'static str {
    status.map(|s| s.color()).unwrap_or("#9CA3AF")
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StatusLog {
    pub id: String,
    pub status: Status,
    #[serde(default)]
    pub comment: String,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewStatusLog {
    pub status: Status,
    pub comment: String,
}

/// List endpoints answer with either a bare array or a paginated envelope.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Listing<T> {
    Bare(Vec<T>),
    Page { results: Vec<T> },
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Bare(items) => items,
            Listing::Page { results } => results,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct StatusDistribution {
    #[serde(rename = "GREEN", default)]
    pub green: u32,
    #[serde(rename = "YELLOW", default)]
    pub yellow: u32,
    #[serde(rename = "RED", default)]
    pub red: u32,
}

impl StatusDistribution {
    pub fn count(&self, status: Status) -> u32 {
        match status {
            Status::Green => self.green,
            Status::Yellow => self.yellow,
            Status::Red => self.red,
        }
    }

    pub fn total(&self) -> u32 {
        self.green + self.yellow + self.red
    }

    /// Non-empty slices in display order, for the distribution chart.
    pub fn slices(&self) -> Vec<(Status, u32)> {
        Status::ALL
            .iter()
            .map(|s| (*s, self.count(*s)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardSummary {
    pub total_users: u32,
    pub today_recorded: u32,
    pub red_alerts: u32,
    pub status_distribution: StatusDistribution,
    pub date: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub user_name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub comment: String,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserStatus {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub department: String,
    pub latest_status: Option<Status>,
    pub latest_comment: Option<String>,
    pub latest_date: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub date: String,
    pub green: u32,
    pub yellow: u32,
    pub red: u32,
    pub total: u32,
}

impl TrendPoint {
    pub fn count(&self, status: Status) -> u32 {
        match status {
            Status::Green => self.green,
            Status::Yellow => self.yellow,
            Status::Red => self.red,
        }
    }
}

/// Number of days covered by the trend chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TrendWindow {
    #[default]
    Week,
    TwoWeeks,
    Month,
}

impl TrendWindow {
    pub const ALL: [TrendWindow; 3] = [TrendWindow::Week, TrendWindow::TwoWeeks, TrendWindow::Month];

    pub fn days(&self) -> u32 {
        match self {
            TrendWindow::Week => 7,
            TrendWindow::TwoWeeks => 14,
            TrendWindow::Month => 30,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendWindow::Week => "7 days",
            TrendWindow::TwoWeeks => "14 days",
            TrendWindow::Month => "30 days",
        }
    }

    pub fn query_path(&self) -> String {
        format!("/api/status/trend_data/?days={}", self.days())
    }
}

fn weekday_short(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Formats an ISO date as `M/D (Weekday)`. Unparseable input is returned as is.
pub fn format_trend_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("{}/{} ({})", d.month(), d.day(), weekday_short(d.weekday())),
        Err(_) => date.to_string(),
    }
}

/// Formats an RFC 3339 timestamp in its own offset as `YYYY/MM/DD HH:MM`.
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(t) => t.format("%Y/%m/%d %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_uppercase_wire_names() {
        let json = serde_json::to_string(&NewStatusLog {
            status: Status::Yellow,
            comment: "tired".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"status":"YELLOW","comment":"tired"}"#);
        assert_eq!(Status::parse("RED"), Some(Status::Red));
        assert_eq!(Status::parse("red"), None);
    }

    #[test]
    fn listing_accepts_bare_and_paginated() {
        let bare: Listing<StatusLog> = serde_json::from_str(
            r#"[{"id":"1","status":"GREEN","comment":"","created_at":"2025-01-01T09:00:00+09:00"}]"#,
        )
        .unwrap();
        assert_eq!(bare.into_vec().len(), 1);

        let page: Listing<StatusLog> = serde_json::from_str(
            r#"{"count":1,"next":null,"results":[{"id":"2","status":"RED","created_at":"2025-01-02T09:00:00+09:00"}]}"#,
        )
        .unwrap();
        let logs = page.into_vec();
        assert_eq!(logs[0].status, Status::Red);
        assert_eq!(logs[0].comment, "");
    }

    #[test]
    fn distribution_slices_skip_empty_statuses() {
        let dist = StatusDistribution {
            green: 4,
            yellow: 0,
            red: 1,
        };
        assert_eq!(dist.slices(), vec![(Status::Green, 4), (Status::Red, 1)]);
        assert_eq!(dist.total(), 5);
        assert!(StatusDistribution::default().slices().is_empty());
    }

    #[test]
    fn summary_parses_backend_payload() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{"total_users":10,"today_recorded":6,"red_alerts":2,
                "status_distribution":{"GREEN":3,"YELLOW":1,"RED":2},"date":"2025-03-04"}"#,
        )
        .unwrap();
        assert_eq!(summary.status_distribution.count(Status::Red), 2);
    }

    #[test]
    fn missing_status_renders_as_not_recorded() {
        assert_eq!(status_label(None), "Not recorded");
        assert_eq!(status_color(None), "#9CA3AF");
        assert_eq!(status_label(Some(Status::Yellow)), "Caution");
    }

    #[test]
    fn trend_dates_show_month_day_and_weekday() {
        assert_eq!(format_trend_date("2025-03-04"), "3/4 (Tue)");
        assert_eq!(format_trend_date("not-a-date"), "not-a-date");
        assert_eq!(TrendWindow::Month.query_path(), "/api/status/trend_data/?days=30");
    }

    #[test]
    fn timestamps_keep_their_offset() {
        assert_eq!(
            format_timestamp("2025-03-04T18:05:00+09:00"),
            "2025/03/04 18:05"
        );
    }
}
