//! Fixture Server
//!
//! Replays a precomputed analytics snapshot so the dashboard can be run
//! and tested without the real FixItNow backend. Nothing is computed here.
//!
//! # Endpoints
//!
//! - `GET /analytics/admin/dashboard` - The snapshot payload
//! - `GET /health` - Liveness and version

mod error;

pub use error::{ErrorBody, ErrorResponse, FixtureError};

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::analytics::{AnalyticsPayload, DASHBOARD_ENDPOINT};

/// Shared state for fixture handlers
#[derive(Debug, Clone)]
pub struct FixtureState {
    payload: AnalyticsPayload,
    token: Option<String>,
    start_time: Instant,
}

impl FixtureState {
    pub fn new(payload: AnalyticsPayload, token: Option<String>) -> Self {
        Self {
            payload,
            token: token.filter(|t| !t.is_empty()),
            start_time: Instant::now(),
        }
    }

    /// Load the snapshot from a JSON file
    pub fn from_file(path: &Path, token: Option<String>) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path).map_err(|e| FixtureError::PayloadRead {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let payload =
            AnalyticsPayload::from_json(&content).map_err(|e| FixtureError::PayloadInvalid {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        Ok(Self::new(payload, token))
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    fn authorize(&self, headers: &HeaderMap) -> Result<(), FixtureError> {
        let Some(expected) = &self.token else {
            return Ok(());
        };

        let presented = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        match presented {
            Some(token) if token == expected => Ok(()),
            _ => Err(FixtureError::Unauthorized),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// GET /analytics/admin/dashboard
async fn dashboard(
    State(state): State<Arc<FixtureState>>,
    headers: HeaderMap,
) -> Result<Json<AnalyticsPayload>, FixtureError> {
    state.authorize(&headers)?;
    Ok(Json(state.payload.clone()))
}

/// GET /health
async fn health(State(state): State<Arc<FixtureState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Build the fixture router with middleware
pub fn build_router(state: FixtureState) -> Router {
    Router::new()
        .route(DASHBOARD_ENDPOINT, get(dashboard))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        // The WASM UI is served from a different origin during development
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Start the fixture server and run until Ctrl+C or SIGTERM
pub async fn serve(state: FixtureState, addr: &str) -> Result<(), FixtureError> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Fixture server listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Fixture server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
