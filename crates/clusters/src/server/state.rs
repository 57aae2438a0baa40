//! Shared state handed to every request handler

use std::sync::Arc;

use crate::clustering::ClusteringService;

/// Injected dependencies and settings for the request handlers.
///
/// The clustering client is passed in rather than constructed here so tests
/// can substitute a double behind the same trait.
#[derive(Clone)]
pub struct AppState {
  /// Gateway to the external clustering service
  pub clustering: Arc<dyn ClusteringService>,

  /// Include upstream failure details in error responses (non-production only)
  pub expose_error_details: bool,
}

impl AppState {
  pub fn new(clustering: Arc<dyn ClusteringService>, expose_error_details: bool) -> Self {
    Self { clustering, expose_error_details }
  }
}
