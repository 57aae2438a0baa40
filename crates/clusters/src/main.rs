//! Clusters REST Server
//!
//! HTTP entry point for the customer interview segmentation service.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use clusters::clustering::{ClusteringConfig, HttpClusteringService};
use clusters::server::startup::start_server;
use clusters::server::state::AppState;

#[derive(Parser)]
#[command(name = "clusters_server")]
#[command(about = "Customer interview segmentation service")]
#[command(version)]
struct Args {
  /// Server bind address
  #[arg(long, default_value = "127.0.0.1:3000", env = "CLUSTERS_BIND")]
  bind: SocketAddr,

  /// Endpoint of the external clustering service
  #[arg(long, default_value = "http://localhost:8000/cluster", env = "CLUSTERING_SERVICE_URL")]
  clustering_url: String,

  /// Clustering request timeout in seconds
  #[arg(long, default_value_t = 30, env = "CLUSTERING_TIMEOUT_SECS")]
  clustering_timeout: u64,

  /// Include upstream failure details in error responses (never in production)
  #[arg(long, env = "CLUSTERS_EXPOSE_ERROR_DETAILS")]
  expose_error_details: bool,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let filter = if args.verbose {
    EnvFilter::new("debug,hyper=info")
  } else {
    EnvFilter::new("clusters=info,tower_http=info,warn")
  };

  tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

  info!("starting clusters server v{}", env!("CARGO_PKG_VERSION"));
  info!("clustering service endpoint: {}", args.clustering_url);

  let clustering = Arc::new(HttpClusteringService::with_config(ClusteringConfig {
    endpoint: args.clustering_url,
    timeout_secs: args.clustering_timeout,
  }));
  let state = AppState::new(clustering, args.expose_error_details);

  start_server(args.bind, state).await
}
