//! Health check, statistics and metrics endpoints.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dispatch::DispatcherStatsSnapshot;
use crate::error::{AppError, Result};
use crate::metrics::encode_metrics;
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub token_store: BackendHealthResponse,
    pub transport: BackendHealthResponse,
}

#[derive(Debug, Serialize)]
pub struct BackendHealthResponse {
    pub backend: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub dispatch: DispatcherStatsSnapshot,
    pub timestamp: DateTime<Utc>,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        token_store: BackendHealthResponse {
            backend: state.token_store.backend_name().to_string(),
        },
        transport: BackendHealthResponse {
            backend: state.transport.transport_name().to_string(),
        },
    })
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        dispatch: state.dispatcher.stats(),
        timestamp: Utc::now(),
    })
}

pub async fn metrics() -> Result<String> {
    encode_metrics().map_err(|e| AppError::Internal(e.to_string()))
}
