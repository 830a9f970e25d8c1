//! HTTP server for the web UI and classification API.
//!
//! Serves a small single-page UI at `/` and JSON endpoints under `/api/`.
//! CORS is permissive so the UI can be served from elsewhere during
//! development.

pub mod config;
mod error;
mod handlers;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{DefaultBodyLimit, Request};
use axum::middleware::Next;
use axum::response::Response;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use crate::{Classifier, FlokkrError, Result};
use config::Config;
use state::{AppState, SharedState};

/// Build the complete router with all routes.
pub fn build_router(classifier: Classifier, config: &Config) -> Router {
    let max_upload = config.server.limits.max_upload_bytes;
    let state: SharedState = Arc::new(AppState {
        classifier,
        limits: config.server.limits.clone(),
    });

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/classify", post(handlers::classify))
        .route("/api/classify-batch", post(handlers::classify_batch))
        .route("/api/classify-file", post(handlers::classify_file))
        .route("/api/status", get(handlers::status))
        .route("/api/download-results", post(handlers::download_results))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(axum::middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the server until the process is stopped.
pub async fn run(classifier: Classifier, config: Config) -> Result<()> {
    let addr: SocketAddr = config
        .server
        .address
        .parse()
        .map_err(|e| FlokkrError::Configuration(format!("invalid address: {e}")))?;

    let app = build_router(classifier, &config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| FlokkrError::Configuration(format!("failed to bind {addr}: {e}")))?;

    info!(%addr, "flokkrd listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| FlokkrError::Http(e.to_string()))
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let response = next.run(req).await;
    debug!(%method, path, status = response.status().as_u16(), "request");
    response
}
