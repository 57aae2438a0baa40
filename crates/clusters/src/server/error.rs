//! Error mapping at the analyze request boundary

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::server::types::ErrorBody;

/// Everything that can go wrong while handling an analyze request.
///
/// Display strings are the exact client-facing messages; nothing else leaks
/// unless the server explicitly opts into exposing details.
#[derive(Debug, Error)]
pub enum AnalyzeError {
  /// Submission missing or shorter than the minimum useful length
  #[error("Please provide more interview data for analysis")]
  NotEnoughText,

  /// Fewer than two interviews survived chunking
  #[error("Please provide at least 2 interviews for clustering analysis")]
  NotEnoughInterviews,

  /// The clustering service failed, timed out, or returned an unusable body
  #[error("Analysis temporarily unavailable. Please try again in a moment.")]
  ClusteringUnavailable { cause: anyhow::Error },
}

impl AnalyzeError {
  pub fn status(&self) -> StatusCode {
    match self {
      AnalyzeError::NotEnoughText | AnalyzeError::NotEnoughInterviews => StatusCode::BAD_REQUEST,
      AnalyzeError::ClusteringUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// Build the JSON body for this error. The upstream cause is attached only
  /// when the server runs with error details enabled (non-production).
  pub fn into_body(self, expose_details: bool) -> ErrorBody {
    let error = self.to_string();
    let details = match self {
      AnalyzeError::ClusteringUnavailable { cause } if expose_details => Some(cause.to_string()),
      _ => None,
    };

    ErrorBody { error, details }
  }

  pub fn into_response_with(self, expose_details: bool) -> Response {
    let status = self.status();
    (status, Json(self.into_body(expose_details))).into_response()
  }
}
