//! HTTP surface: the converter page at `/` and the history page at `/history`.

pub mod handlers;
pub mod views;

use crate::core::{ConversionHistory, RateProvider};
use anyhow::{Context, Result};
use axum::Router;
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;

/// Shared state for all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn RateProvider>,
    pub history: ConversionHistory,
}

impl AppState {
    pub fn new(provider: Arc<dyn RateProvider>, history: ConversionHistory) -> Self {
        Self { provider, history }
    }
}

/// Build the application router with state applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/history", get(handlers::history))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("Currency converter listening on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Currency converter shutting down");
        })
        .await
        .context("Server error")
}
