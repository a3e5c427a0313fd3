use axum::routing::get;
use axum::{Json, Router, extract::State};
use quickbite_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub latency_ms: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub database: DatabaseHealthStatus,
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/health"), get(health))
        .route(&format!("{root_path}/health/ready"), get(ready))
}

async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let latency_ms = state.service.health().await.map_err(|e| {
        error!("database ping failed: {}", e);
        ApiError::ServiceUnavailable("Database unreachable".to_string())
    })?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        latency_ms,
    }))
}

async fn ready(State(state): State<AppState>) -> Result<Json<ReadyResponse>, ApiError> {
    let database = state.service.readness().await.map_err(ApiError::from)?;

    if !database.reachable {
        return Err(ApiError::ServiceUnavailable(
            "Database unreachable".to_string(),
        ));
    }

    Ok(Json(ReadyResponse { database }))
}
