//! Gateway to the external clustering service
//!
//! This module owns the one outbound call the service makes. The clustering
//! algorithm itself lives behind the HTTP boundary; from here it is a black
//! box that takes interview texts and hands back grouped results.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;

use crate::segmentation::chunker::InterviewRecord;

/// Configuration for the clustering gateway
#[derive(Debug, Clone)]
pub struct ClusteringConfig {
  /// Full endpoint URL of the clustering service
  pub endpoint: String,
  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Default for ClusteringConfig {
  fn default() -> Self {
    Self { endpoint: "http://localhost:8000/cluster".to_string(), timeout_secs: 30 }
  }
}

/// Request body sent to the clustering service
#[derive(Debug, Serialize, Deserialize)]
pub struct ClusterRequest {
  /// Interview texts to group
  pub data_points: Vec<String>,
  /// Desired number of groups
  pub num_clusters: usize,
}

/// Response body returned by the clustering service
#[derive(Debug, Serialize, Deserialize)]
pub struct ClusterResponseBody {
  pub clusters: Vec<ClusterResult>,
}

/// One group of interviews as returned by the clustering service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterResult {
  /// Identifier assigned by the clustering service; opaque to this system
  #[serde(default)]
  pub id: serde_json::Value,

  /// Interviews the service placed in this group
  pub data_points: Vec<DataPoint>,

  /// One-line characterization of the group
  pub summary: String,

  /// Internal cohesion score of the group
  pub similarity_score: f64,
}

/// One interview as echoed back by the clustering service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPoint {
  pub content: String,

  #[serde(default)]
  pub id: String,
}

// Service trait for dependency injection
#[async_trait]
pub trait ClusteringService: Send + Sync {
  /// Group the given interview records into at most `num_clusters` clusters.
  ///
  /// Any transport failure, timeout, non-success status, or unusable body is
  /// a single opaque error; this layer never retries.
  async fn cluster(
    &self,
    records: &[InterviewRecord],
    num_clusters: usize,
  ) -> Result<Vec<ClusterResult>>;
}

/// Production gateway backed by reqwest
pub struct HttpClusteringService {
  client: Client,
  config: ClusteringConfig,
}

impl HttpClusteringService {
  /// Create a gateway with default configuration
  pub fn new() -> Self {
    Self::with_config(ClusteringConfig::default())
  }

  /// Create a gateway with custom configuration
  pub fn with_config(config: ClusteringConfig) -> Self {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .expect("Failed to create HTTP client");

    Self { client, config }
  }
}

impl Default for HttpClusteringService {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl ClusteringService for HttpClusteringService {
  async fn cluster(
    &self,
    records: &[InterviewRecord],
    num_clusters: usize,
  ) -> Result<Vec<ClusterResult>> {
    let request = ClusterRequest {
      data_points: records.iter().map(|record| record.content.clone()).collect(),
      num_clusters,
    };

    let response = timeout(
      Duration::from_secs(self.config.timeout_secs),
      self.client.post(&self.config.endpoint).json(&request).send(),
    )
    .await??;

    if !response.status().is_success() {
      let status = response.status();
      let error_text = response.text().await.unwrap_or_default();
      return Err(anyhow!("Clustering service returned {status}: {error_text}"));
    }

    let body: ClusterResponseBody =
      response.json().await.map_err(|e| anyhow!("Malformed clustering response: {e}"))?;

    Ok(body.clusters)
  }
}

#[cfg(test)]
mod clustering_tests {
  use super::*;

  #[test]
  fn test_cluster_request_wire_shape() {
    let request = ClusterRequest {
      data_points: vec!["first interview".to_string(), "second interview".to_string()],
      num_clusters: 4,
    };

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["data_points"][0], "first interview");
    assert_eq!(json["data_points"][1], "second interview");
    assert_eq!(json["num_clusters"], 4);
  }

  #[test]
  fn test_cluster_response_parses_full_body() {
    let body = r#"{
      "clusters": [
        {
          "id": 0,
          "data_points": [
            {"content": "I love the flexible hours", "id": "interview-1"},
            {"content": "Scheduling works around my shifts", "id": "interview-2"}
          ],
          "summary": "Values flexible scheduling",
          "similarity_score": 0.87
        }
      ]
    }"#;

    let parsed: ClusterResponseBody = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.clusters.len(), 1);
    assert_eq!(parsed.clusters[0].data_points.len(), 2);
    assert_eq!(parsed.clusters[0].summary, "Values flexible scheduling");
    assert!((parsed.clusters[0].similarity_score - 0.87).abs() < f64::EPSILON);
  }

  #[test]
  fn test_cluster_response_missing_clusters_is_rejected() {
    let body = r#"{"groups": []}"#;

    let parsed: std::result::Result<ClusterResponseBody, _> = serde_json::from_str(body);
    assert!(parsed.is_err());
  }

  #[test]
  fn test_data_point_id_defaults_when_absent() {
    let body = r#"{
      "clusters": [
        {
          "id": "c-1",
          "data_points": [{"content": "No id on this one"}],
          "summary": "Whatever",
          "similarity_score": 0.5
        }
      ]
    }"#;

    let parsed: ClusterResponseBody = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.clusters[0].data_points[0].id, "");
  }

  #[test]
  fn test_default_config_points_at_local_service() {
    let config = ClusteringConfig::default();
    assert_eq!(config.endpoint, "http://localhost:8000/cluster");
    assert_eq!(config.timeout_secs, 30);
  }
}
