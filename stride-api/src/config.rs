//! Relay Configuration Module
//!
//! Configuration is loaded from environment variables with development
//! defaults. The credential is the only value without a default: its
//! absence is a per-request configuration error, never a startup crash.

use std::net::SocketAddr;

use crate::error::{ApiError, ApiResult};

/// Relay configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind host for the HTTP listener.
    pub bind_host: String,

    /// Bind port for the HTTP listener.
    pub port: u16,

    /// Allowed CORS origins (comma-separated in the env var).
    /// Empty means allow all origins (dev mode).
    pub cors_origins: Vec<String>,

    /// OpenAI API credential. `None` is legal at startup; the chat route
    /// reports a configuration error per request.
    pub openai_api_key: Option<String>,

    /// Model identifier sent upstream.
    pub model: String,

    /// Response length cap sent upstream.
    pub max_tokens: i32,

    /// Sampling temperature sent upstream.
    pub temperature: f32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: 3001,
            cors_origins: Vec::new(), // Empty = allow all
            openai_api_key: None,
            model: "gpt-4o-mini".to_string(),
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `STRIDE_API_BIND`: Bind host (default: 0.0.0.0)
    /// - `PORT` / `STRIDE_API_PORT`: Bind port (default: 3001)
    /// - `STRIDE_CORS_ORIGINS`: Comma-separated allowed origins (empty = allow all)
    /// - `STRIDE_OPENAI_API_KEY`: OpenAI credential
    /// - `STRIDE_OPENAI_MODEL`: Model identifier (default: gpt-4o-mini)
    /// - `STRIDE_MAX_TOKENS`: Response length cap (default: 500)
    /// - `STRIDE_TEMPERATURE`: Sampling temperature (default: 0.7)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind_host = std::env::var("STRIDE_API_BIND").unwrap_or(defaults.bind_host);

        let port = std::env::var("PORT")
            .ok()
            .or_else(|| std::env::var("STRIDE_API_PORT").ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let cors_origins = std::env::var("STRIDE_CORS_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let openai_api_key = std::env::var("STRIDE_OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let model = std::env::var("STRIDE_OPENAI_MODEL").unwrap_or(defaults.model);

        let max_tokens = std::env::var("STRIDE_MAX_TOKENS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_tokens);

        let temperature = std::env::var("STRIDE_TEMPERATURE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.temperature);

        Self {
            bind_host,
            port,
            cors_origins,
            openai_api_key,
            model,
            max_tokens,
            temperature,
        }
    }

    /// Resolve the socket address to bind.
    pub fn bind_addr(&self) -> ApiResult<SocketAddr> {
        let addr = format!("{}:{}", self.bind_host, self.port);
        addr.parse::<SocketAddr>()
            .map_err(|e| ApiError::invalid_input(format!("Invalid bind address {}: {}", addr, e)))
    }
}
