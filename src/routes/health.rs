//! Health check endpoint
//!
//! Liveness only: the process is up and serving. Upstream reachability is
//! deliberately not probed.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Health status
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Health response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
}

/// Liveness probe, accepted on any method
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: HealthStatus::Healthy,
        }),
    )
}
