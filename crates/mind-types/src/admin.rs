use std::collections::BTreeSet;

use crate::status::{Status, UserStatus};

/// Filters applied to the admin user-status table and to CSV export.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UserFilter {
    /// `None` means every department.
    pub department: Option<String>,
    pub status: Option<Status>,
    pub search: String,
}

impl UserFilter {
    pub fn matches(&self, user: &UserStatus) -> bool {
        if let Some(department) = &self.department {
            if &user.department != department {
                return false;
            }
        }

        if let Some(status) = self.status {
            if user.latest_status != Some(status) {
                return false;
            }
        }

        let needle = self.search.to_lowercase();
        if !needle.is_empty() && !user.full_name.to_lowercase().contains(&needle) {
            return false;
        }

        true
    }

    pub fn apply<'a>(&self, users: &'a [UserStatus]) -> Vec<&'a UserStatus> {
        users.iter().filter(|u| self.matches(u)).collect()
    }
}

/// Distinct departments, sorted, without blanks or the "-" placeholder.
pub fn departments(users: &[UserStatus]) -> Vec<String> {
    users
        .iter()
        .map(|u| u.department.as_str())
        .filter(|d| !d.is_empty() && *d != "-")
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// CSV export parameters. A range is used only when both ends are set.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportRequest {
    pub start_date: String,
    pub end_date: String,
    pub filter: UserFilter,
}

impl ExportRequest {
    pub fn range(&self) -> Option<(&str, &str)> {
        let start = self.start_date.trim();
        let end = self.end_date.trim();
        if start.is_empty() || end.is_empty() {
            None
        } else {
            Some((start, end))
        }
    }

    pub fn query_string(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some((start, end)) = self.range() {
            params.push(("start_date", start.to_string()));
            params.push(("end_date", end.to_string()));
        }
        if let Some(department) = &self.filter.department {
            params.push(("department", department.clone()));
        }
        if let Some(status) = self.filter.status {
            params.push(("status", status.as_str().to_string()));
        }
        if !self.filter.search.is_empty() {
            params.push(("search", self.filter.search.clone()));
        }

        params
            .into_iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn path(&self) -> String {
        format!("/api/status/export_csv/?{}", self.query_string())
    }

    /// `today` is an ISO date, used when no range is selected.
    pub fn filename(&self, today: &str) -> String {
        match self.range() {
            Some((start, end)) => format!("user_status_{start}_{end}.csv"),
            None => format!("user_status_latest_{today}.csv"),
        }
    }
}

pub const TEMPLATE_FILENAME: &str = "user_template.xlsx";

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, department: &str, status: Option<Status>) -> UserStatus {
        UserStatus {
            id: name.to_lowercase(),
            full_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            department: department.to_string(),
            latest_status: status,
            latest_comment: None,
            latest_date: None,
        }
    }

    fn roster() -> Vec<UserStatus> {
        vec![
            user("Aiko Tanaka", "Sales", Some(Status::Green)),
            user("Ben Ito", "Sales", Some(Status::Red)),
            user("Chie Mori", "2A", None),
            user("Daichi Ono", "-", Some(Status::Red)),
        ]
    }

    #[test]
    fn empty_filter_keeps_everyone() {
        let users = roster();
        assert_eq!(UserFilter::default().apply(&users).len(), 4);
    }

    #[test]
    fn filters_combine() {
        let users = roster();
        let filter = UserFilter {
            department: Some("Sales".into()),
            status: Some(Status::Red),
            search: String::new(),
        };
        let names: Vec<_> = filter.apply(&users).iter().map(|u| u.full_name.as_str()).collect();
        assert_eq!(names, vec!["Ben Ito"]);
    }

    #[test]
    fn search_is_case_insensitive_on_name() {
        let users = roster();
        let filter = UserFilter {
            search: "MORI".into(),
            ..UserFilter::default()
        };
        assert_eq!(filter.apply(&users).len(), 1);
    }

    #[test]
    fn unrecorded_users_never_match_a_status() {
        let users = roster();
        let filter = UserFilter {
            status: Some(Status::Green),
            ..UserFilter::default()
        };
        assert!(filter.apply(&users).iter().all(|u| u.latest_status.is_some()));
    }

    #[test]
    fn department_options_skip_placeholders() {
        assert_eq!(departments(&roster()), vec!["2A".to_string(), "Sales".to_string()]);
    }

    #[test]
    fn department_option_selects_its_users_verbatim() {
        let users = vec![user("Eri Kato", "Sales ", Some(Status::Green))];
        let options = departments(&users);
        assert_eq!(options, vec!["Sales ".to_string()]);

        let filter = UserFilter {
            department: Some(options[0].clone()),
            ..UserFilter::default()
        };
        assert_eq!(filter.apply(&users).len(), 1);

        let request = ExportRequest {
            filter,
            ..ExportRequest::default()
        };
        assert_eq!(request.query_string(), "department=Sales%20");
    }

    #[test]
    fn search_text_is_used_as_typed() {
        let users = roster();
        let filter = UserFilter {
            search: " mori".into(),
            ..UserFilter::default()
        };
        assert!(filter.apply(&users).is_empty());

        let request = ExportRequest {
            filter,
            ..ExportRequest::default()
        };
        assert_eq!(request.query_string(), "search=%20mori");
    }

    #[test]
    fn export_latest_snapshot() {
        let request = ExportRequest::default();
        assert_eq!(request.path(), "/api/status/export_csv/?");
        assert_eq!(request.filename("2025-03-04"), "user_status_latest_2025-03-04.csv");
    }

    #[test]
    fn export_half_range_is_ignored() {
        let request = ExportRequest {
            start_date: "2025-03-01".into(),
            ..ExportRequest::default()
        };
        assert_eq!(request.range(), None);
        assert_eq!(request.query_string(), "");
    }

    #[test]
    fn export_range_with_filters() {
        let request = ExportRequest {
            start_date: "2025-03-01".into(),
            end_date: "2025-03-31".into(),
            filter: UserFilter {
                department: Some("R&D".into()),
                status: Some(Status::Yellow),
                search: "ito".into(),
            },
        };
        assert_eq!(
            request.query_string(),
            "start_date=2025-03-01&end_date=2025-03-31&department=R%26D&status=YELLOW&search=ito"
        );
        assert_eq!(
            request.filename("2025-04-01"),
            "user_status_2025-03-01_2025-03-31.csv"
        );
    }
}
