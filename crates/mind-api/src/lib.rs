#![allow(non_snake_case)]

pub mod routes;
pub mod state;

use axum::{extract::DefaultBodyLimit, Router};

pub use crate::state::AppState;

/// Upper bound for forwarded bodies, sized for bulk-upload spreadsheets.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
