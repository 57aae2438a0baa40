//! Analyze endpoint handler
//!
//! The one multi-step operation in the service: validate the submission,
//! chunk it into interview records, hand the records to the clustering
//! service, then shape the grouped result into display segments. The whole
//! pipeline is request-scoped; nothing survives the response.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::clustering::ClusteringService;
use crate::segmentation::chunker::chunk_interviews;
use crate::segmentation::labeler::label_clusters;
use crate::segmentation::percentages::normalize_percentages;
use crate::server::error::AnalyzeError;
use crate::server::state::AppState;
use crate::server::types::{AnalyzeRequest, AnalyzeResponse, Segment};

/// Minimum trimmed submission length worth analyzing, in characters
const MIN_SUBMISSION_CHARS: usize = 50;

/// How many groups the clustering service is asked for
const TARGET_CLUSTERS: usize = 4;

/// POST /analyze - segment a pasted blob of customer interviews
#[axum::debug_handler]
pub async fn analyze(
  State(state): State<AppState>,
  Json(request): Json<AnalyzeRequest>,
) -> Response {
  let request_id = Uuid::new_v4();

  match run_analysis(request.raw_data.as_deref(), state.clustering.as_ref()).await {
    Ok(segments) => {
      info!(%request_id, segments = segments.len(), "analysis complete");
      (StatusCode::OK, Json(AnalyzeResponse { segments })).into_response()
    }
    Err(error) => {
      match &error {
        AnalyzeError::ClusteringUnavailable { cause } => {
          error!(%request_id, %cause, "clustering call failed");
        }
        rejected => {
          warn!(%request_id, reason = %rejected, "analysis request rejected");
        }
      }

      error.into_response_with(state.expose_error_details)
    }
  }
}

/// Run the full pipeline: chunk, cluster, label, normalize.
///
/// All-or-nothing: a failure at any stage discards everything built so far
/// and surfaces as a single typed error.
pub async fn run_analysis(
  raw_data: Option<&str>,
  clustering: &dyn ClusteringService,
) -> Result<Vec<Segment>, AnalyzeError> {
  let raw = raw_data.unwrap_or("").trim();
  if raw.chars().count() < MIN_SUBMISSION_CHARS {
    return Err(AnalyzeError::NotEnoughText);
  }

  let records = chunk_interviews(raw);
  if records.len() < 2 {
    return Err(AnalyzeError::NotEnoughInterviews);
  }

  let clusters = clustering
    .cluster(&records, TARGET_CLUSTERS)
    .await
    .map_err(|cause| AnalyzeError::ClusteringUnavailable { cause })?;

  let mut segments = label_clusters(&clusters);
  normalize_percentages(&mut segments);

  Ok(segments)
}
