//! Error types for the Chat Relay
//!
//! Every failure on the chat path is caught at the relay boundary and
//! serialized as `{ "error": <message> }` with an appropriate HTTP status.
//! Nothing propagates as an unhandled fault.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use stride_llm::LlmError;

/// JSON body of every relay error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Structured error for relay operations.
///
/// The status code travels out-of-band; the wire shape is the bare
/// `{ "error": ... }` object the client contract specifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    // ========================================================================
    // Convenience constructors for the relay's failure taxonomy
    // ========================================================================

    /// Missing credential configuration. Names the variable, never its value.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Upstream rejected the request: its status and message pass through
    /// unchanged.
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
        Self::new(status, message)
    }

    /// Anything unexpected: generic message plus the underlying detail for
    /// diagnostics.
    pub fn internal(detail: impl fmt::Display) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal server error: {}", detail),
        )
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::ProviderNotConfigured => Self::configuration(err.to_string()),
            LlmError::RequestFailed { status, message } => Self::upstream(status, message),
            LlmError::RateLimited { message, .. } => {
                Self::new(StatusCode::TOO_MANY_REQUESTS, message)
            }
            LlmError::Transport(_) | LlmError::InvalidResponse { .. } => Self::internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

/// Result type alias for relay operations.
pub type ApiResult<T> = Result<T, ApiError>;
