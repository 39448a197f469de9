//! Health Check Endpoint
//!
//! `GET /api/health` answers `200 { "status": "ok", "message": ... }` as
//! long as the process is serving. No authentication, no inputs.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Server is running".to_string(),
        }
    }
}

/// GET /api/health - liveness check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Relay is running", body = HealthResponse),
    ),
)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::ok()))
}

/// Create the health router (no auth, no state).
pub fn create_router() -> Router {
    Router::new().route("/health", get(health))
}
