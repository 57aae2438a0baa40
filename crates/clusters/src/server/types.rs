//! REST API types with schemars annotations for OpenAPI generation

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// Analyze Endpoint
// ================

/// Request for the /analyze endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzeRequest {
  /// Raw pasted interview text
  #[serde(rename = "rawData", default)]
  pub raw_data: Option<String>,
}

/// Response for the /analyze endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzeResponse {
  /// One entry per cluster returned by the analysis
  pub segments: Vec<Segment>,
}

/// A labeled, percentage-weighted view of one cluster
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Segment {
  /// Human-readable segment name
  pub name: String,

  /// Share of interviewed customers, 0-100
  pub percentage: u32,

  /// Number of interviews in the cluster
  pub count: usize,

  /// Display color (hex), cycling through a fixed palette
  pub color: String,

  /// Cluster characterization as produced by the clustering service
  pub insight: String,

  /// Representative quote: the cluster's first interview, truncated
  pub quote: String,

  /// Templated one-line description of the segment share
  pub summary: String,
}

/// Error body returned for rejected or failed analyses
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ErrorBody {
  /// Human readable error message
  pub error: String,

  /// Underlying failure detail; only populated outside production
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub details: Option<String>,
}

// Status/Version Endpoints
// ========================

/// Response for the /status endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StatusResponse {
  /// Service health indicator
  pub status: String,

  /// Current service version
  pub version: String,
}

/// Response for the /version endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct VersionResponse {
  /// Current service version
  pub version: String,
}
