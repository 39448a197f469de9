//! Relay Routes Module
//!
//! Two route groups (health, chat) plus the OpenAPI document, assembled
//! under `/api` with CORS and request tracing layers.

pub mod chat;
pub mod health;

use std::sync::Arc;

use axum::{http::HeaderValue, response::IntoResponse, routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::openapi::ApiDoc;

pub use chat::{create_router as chat_router, ChatState};
pub use health::create_router as health_router;

/// Handler for /openapi.json.
async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Build the CORS layer from configured origins. An empty origin list is
/// dev mode: allow all.
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Assemble the full relay router.
pub fn create_api_router(config: &ApiConfig) -> ApiResult<Router> {
    let chat_state = Arc::new(ChatState::from_config(config));

    let api = Router::new()
        .merge(health_router())
        .merge(chat_router(chat_state));

    Ok(Router::new()
        .nest("/api", api)
        .route("/openapi.json", get(openapi_json))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_builds_without_credential() {
        let config = ApiConfig::default();
        assert!(create_api_router(&config).is_ok());
    }

    #[test]
    fn test_router_builds_with_restricted_origins() {
        let config = ApiConfig {
            cors_origins: vec!["https://stride.example".to_string()],
            ..ApiConfig::default()
        };
        assert!(create_api_router(&config).is_ok());
    }
}
