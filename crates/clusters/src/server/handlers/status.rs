//! Status and version endpoint handlers

use axum::response::Json;

use crate::server::types::{StatusResponse, VersionResponse};

/// GET /status - Health check endpoint
pub async fn status() -> Json<StatusResponse> {
  Json(StatusResponse {
    status: "healthy".to_string(),
    version: env!("CARGO_PKG_VERSION").to_string(),
  })
}

/// GET /version - Returns current service version
pub async fn version() -> Json<VersionResponse> {
  Json(VersionResponse { version: env!("CARGO_PKG_VERSION").to_string() })
}
