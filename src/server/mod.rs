// src/server/mod.rs

//! HTTP transport around the analyzer.
//!
//! - [`routes`] holds the handlers (`GET /`, `POST /pipelines/parse`).
//! - [`cors`] builds the cross-origin layer from `[cors]`.
//! - [`error`] renders rejected requests as JSON.
//!
//! The analyzer is stateless, so [`AppState`] carries no locks.

pub mod cors;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ConfigFile;
use crate::dag::GraphAnalyzer;
use crate::errors::Result;

/// Shared handler state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub analyzer: GraphAnalyzer,
}

/// Build the full router, CORS and request tracing included.
pub fn build_router(cfg: &ConfigFile) -> Result<Router> {
    let state = AppState::default();

    let router = Router::new()
        .route("/", get(routes::ping))
        .route("/pipelines/parse", post(routes::parse_pipeline))
        .with_state(state)
        .layer(cors::cors_layer(&cfg.cors)?)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

/// Bind `[server].bind` and serve until Ctrl-C.
pub async fn serve(cfg: ConfigFile) -> Result<()> {
    let app = build_router(&cfg)?;

    let listener = TcpListener::bind(cfg.server.bind).await?;
    let local_addr = listener.local_addr()?;
    info!(
        addr = %local_addr,
        allowed_origin = %cfg.cors.allowed_origin,
        "dagcheck listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, stopping server");
}
