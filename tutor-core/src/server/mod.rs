//! HTTP server exposing the assistant.
//!
//! The server is organized into separate concerns:
//! - `types`: error and health payloads
//! - `handler`: request handlers
//! - this module: routing and the listener loop

mod handler;
mod types;

pub use types::{ApiError, ErrorBody, HealthResponse};

use crate::assistant::Assistant;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid bind address {addr}: {source}")]
    InvalidAddress {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the application router.
pub fn router(assistant: Arc<Assistant>) -> Router {
    Router::new()
        .route("/api/", post(handler::answer_question))
        .route("/api", post(handler::answer_question))
        .route("/health", get(handler::health))
        .layer(TraceLayer::new_for_http())
        .with_state(assistant)
}

/// Serves the assistant on `bind` until Ctrl-C.
pub async fn serve(assistant: Arc<Assistant>, bind: &str) -> Result<(), ServerError> {
    let addr: SocketAddr = bind.parse().map_err(|source| ServerError::InvalidAddress {
        addr: bind.to_string(),
        source,
    })?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(%addr, "Listening");
    axum::serve(listener, router(assistant))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutting down..."),
        Err(e) => {
            warn!(error = %e, "Could not listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
