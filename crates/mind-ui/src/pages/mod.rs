pub mod admin_dashboard;
pub mod admin_register;
pub mod bulk_upload;
pub mod change_password;
pub mod dashboard;
pub mod forgot_password;
pub mod invite;
pub mod login;
pub mod reset_password;
pub mod user_management;
pub mod user_table;
