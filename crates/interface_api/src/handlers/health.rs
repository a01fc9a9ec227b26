//! Liveness check

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Reports the service as healthy; there are no backing stores to check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "claim-docs-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}
