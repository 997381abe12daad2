use axum::Json;
use common::config::AppConfig;
use serde::Serialize;

use crate::response::ApiResponse;

#[derive(Serialize, Default)]
pub struct HealthStatus {
    pub status: String,
    pub project: String,
}

/// GET /health
///
/// Liveness check; reports the project name from configuration.
pub async fn health() -> Json<ApiResponse<HealthStatus>> {
    let status = HealthStatus {
        status: "ok".to_string(),
        project: AppConfig::global().project_name.clone(),
    };
    Json(ApiResponse::success(status, "Service is healthy"))
}
