//! Backend endpoints. Browser only; every call goes through [`Client`].

pub mod client;
pub mod download;
pub mod storage;

use mind_types::admin::ExportRequest;
use mind_types::{
    AdminRegistration, Alert, ApiError, BulkUploadResult, ChangePassword, CurrentUser,
    DashboardSummary, InviteInfo, Listing, LoginRequest, NewStatusLog, PasswordResetRequest,
    RegistrationResponse, StatusLog, TokenPair, TokenPassword, TrendPoint, TrendWindow,
    UserAccount, UserStatus,
};
use web_sys::{File, FormData};

pub use client::Client;
pub use storage::BrowserStore;

pub async fn login(request: &LoginRequest) -> Result<TokenPair, ApiError> {
    Client::public().post("/api/auth/login/", request).await
}

/// Looks up the owner of `token` without ending the session on failure.
pub async fn fetch_current_user(token: &str) -> Result<CurrentUser, ApiError> {
    Client::bearer(token).get("/api/users/me/").await
}

pub async fn status_logs() -> Result<Vec<StatusLog>, ApiError> {
    Client::authenticated()
        .get::<Listing<StatusLog>>("/api/status/")
        .await
        .map(Listing::into_vec)
}

pub async fn submit_status(entry: &NewStatusLog) -> Result<(), ApiError> {
    Client::authenticated().post_unit("/api/status/", entry).await
}

pub async fn dashboard_summary() -> Result<DashboardSummary, ApiError> {
    Client::authenticated()
        .get("/api/status/dashboard_summary/")
        .await
}

pub async fn alerts() -> Result<Vec<Alert>, ApiError> {
    Client::authenticated()
        .get::<Listing<Alert>>("/api/status/alerts/")
        .await
        .map(Listing::into_vec)
}

pub async fn user_statuses() -> Result<Vec<UserStatus>, ApiError> {
    Client::authenticated()
        .get::<Listing<UserStatus>>("/api/status/user_latest_status/")
        .await
        .map(Listing::into_vec)
}

pub async fn trend(window: TrendWindow) -> Result<Vec<TrendPoint>, ApiError> {
    Client::authenticated().get(&window.query_path()).await
}

pub async fn export_csv(request: &ExportRequest) -> Result<Vec<u8>, ApiError> {
    Client::authenticated().get_bytes(&request.path()).await
}

pub async fn users() -> Result<Vec<UserAccount>, ApiError> {
    Client::authenticated()
        .get::<Listing<UserAccount>>("/api/users/")
        .await
        .map(Listing::into_vec)
}

pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    Client::authenticated()
        .delete(&format!("/api/users/{}/delete_user/", urlencoding::encode(id)))
        .await
}

pub async fn csv_template() -> Result<Vec<u8>, ApiError> {
    Client::authenticated()
        .get_bytes("/api/users/csv_template/")
        .await
}

/// Sends `file` as the `file` field of a multipart form.
pub async fn bulk_upload(file: &File) -> Result<BulkUploadResult, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    Client::authenticated()
        .post_form("/api/users/bulk_upload/", form)
        .await
}

/// Also used to check password-reset tokens, which share the invite table.
pub async fn verify_invite(token: &str) -> Result<InviteInfo, ApiError> {
    Client::public()
        .get(&format!(
            "/api/users/verify_invite/?token={}",
            urlencoding::encode(token)
        ))
        .await
}

pub async fn set_password_with_invite(request: &TokenPassword) -> Result<(), ApiError> {
    Client::public()
        .post_unit("/api/users/set_password_with_invite/", request)
        .await
}

pub async fn request_password_reset(request: &PasswordResetRequest) -> Result<(), ApiError> {
    Client::public()
        .post_unit("/api/users/request_password_reset/", request)
        .await
}

pub async fn reset_password(request: &TokenPassword) -> Result<(), ApiError> {
    Client::public()
        .post_unit("/api/users/reset_password/", request)
        .await
}

pub async fn change_password(request: &ChangePassword) -> Result<(), ApiError> {
    Client::authenticated()
        .post_unit("/api/users/change_password/", request)
        .await
}

pub async fn admin_register(
    request: &AdminRegistration,
) -> Result<RegistrationResponse, ApiError> {
    Client::public()
        .post("/api/users/admin_register/", request)
        .await
}
