//! REST server startup and configuration

use anyhow::Result;
use axum::serve;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::server::routing::create_router;
use crate::server::state::AppState;

/// Start the REST server
pub async fn start_server(addr: SocketAddr, state: AppState) -> Result<()> {
  let app = create_router(state).layer(
    ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()), // TODO: restrict CORS origins before exposing this publicly
  );

  let listener = TcpListener::bind(addr).await?;
  info!("server listening on {addr}");

  serve(listener, app).await?;

  Ok(())
}
