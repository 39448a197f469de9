//! Stride Relay Server Entry Point
//!
//! Loads configuration from the environment and starts the Axum HTTP
//! server. A missing credential is logged and tolerated: the chat route
//! reports it per request instead of refusing to boot.

use stride_api::{create_api_router, ApiConfig, ApiError, ApiResult};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ApiResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ApiConfig::from_env();
    if config.openai_api_key.is_none() {
        tracing::warn!(
            "STRIDE_OPENAI_API_KEY is not set; /api/chat will answer with a configuration error"
        );
    }

    let app = create_api_router(&config)?;
    let addr = config.bind_addr()?;
    tracing::info!(%addr, "Starting Stride relay server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
