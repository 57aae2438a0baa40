//! Axum router configuration for all endpoints

use axum::routing::{get, post};
use axum::Router;

use crate::server::handlers::{analyze, status};
use crate::server::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    // Status and version endpoints
    .route("/status", get(status::status))
    .route("/version", get(status::version))
    // Analysis endpoint
    .route("/analyze", post(analyze::analyze))
    .with_state(state)
}
