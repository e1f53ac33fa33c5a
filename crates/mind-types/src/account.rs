use serde::{Deserialize, Serialize};

/// Account role as reported by `/api/users/me/`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    User,
    Other(String),
}

impl Role {
    pub fn parse(value: &str) -> Self {
        match value {
            "ADMIN" => Role::Admin,
            "USER" => Role::User,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
            Role::Other(value) => value,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn label(&self) -> &str {
        match self {
            Role::Admin => "Administrator",
            Role::User => "User",
            Role::Other(value) => value,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::parse(&value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// JWT pair returned by `/api/auth/login/`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct CurrentUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub is_activated: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InvitedUser {
    pub email: String,
    pub full_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InviteInfo {
    pub user: InvitedUser,
}

/// Body for both `set_password_with_invite` and `reset_password`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TokenPassword {
    pub token: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChangePassword {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrgType {
    #[default]
    School,
    Company,
}

impl OrgType {
    pub fn label(&self) -> &'static str {
        match self {
            OrgType::School => "School",
            OrgType::Company => "Company",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AdminRegistration {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub organization_name: String,
    pub org_type: OrgType,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RegisteredAdmin {
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub organization_type: Option<OrgType>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RegistrationResponse {
    #[serde(default)]
    pub success: bool,
    pub user: Option<RegisteredAdmin>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RowError {
    pub row: u32,
    #[serde(default)]
    pub email: Option<String>,
    pub error: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct BulkUploadResult {
    pub success_count: u32,
    pub error_count: u32,
    #[serde(default)]
    pub errors: Vec<RowError>,
}

impl BulkUploadResult {
    pub fn fully_succeeded(&self) -> bool {
        self.error_count == 0
    }
}

/// File types the bulk upload endpoint understands.
pub const BULK_UPLOAD_ACCEPT: &str = ".csv,.xlsx,.xls";

pub fn is_bulk_upload_file(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    BULK_UPLOAD_ACCEPT
        .split(',')
        .any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_roles_are_not_admin() {
        let user: CurrentUser = serde_json::from_str(r#"{"role":"AUDITOR"}"#).unwrap();
        let role = user.role.unwrap();
        assert_eq!(role, Role::Other("AUDITOR".into()));
        assert!(!role.is_admin());
        assert!(Role::parse("ADMIN").is_admin());
    }

    #[test]
    fn current_user_without_role_parses() {
        let user: CurrentUser = serde_json::from_str(r#"{"id":"u1","email":"a@b.c"}"#).unwrap();
        assert!(user.role.is_none());
    }

    #[test]
    fn registration_serializes_org_type_uppercase() {
        let body = AdminRegistration {
            email: "admin@example.com".into(),
            password: "Secret123".into(),
            full_name: "Hana Sato".into(),
            organization_name: "North High".into(),
            org_type: OrgType::Company,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["org_type"], "COMPANY");
    }

    #[test]
    fn bulk_upload_outcome() {
        let result: BulkUploadResult = serde_json::from_str(
            r#"{"success_count":3,"error_count":1,"errors":[{"row":5,"error":"duplicate email"}]}"#,
        )
        .unwrap();
        assert!(!result.fully_succeeded());
        assert_eq!(result.success_count, 3);
        assert_eq!(result.errors[0].email, None);
    }

    #[test]
    fn bulk_upload_file_extensions() {
        assert!(is_bulk_upload_file("users.XLSX"));
        assert!(is_bulk_upload_file("users.csv"));
        assert!(!is_bulk_upload_file("users.pdf"));
    }
}
