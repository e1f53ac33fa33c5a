pub mod account;
pub mod admin;
pub mod error;
pub mod guard;
pub mod password;
pub mod session;
pub mod status;

pub use account::*;
pub use error::ApiError;
pub use status::*;

