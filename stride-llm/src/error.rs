//! Error types for upstream chat-completion calls

use thiserror::Error;

/// Errors produced while talking to the chat-completion API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LlmError {
    #[error("OpenAI API key not configured. Set STRIDE_OPENAI_API_KEY in the server environment")]
    ProviderNotConfigured,

    #[error("Upstream request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("{message}")]
    RateLimited { retry_after_ms: i64, message: String },

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("Invalid response from upstream: {reason}")]
    InvalidResponse { reason: String },
}

pub type LlmResult<T> = Result<T, LlmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message_names_the_variable_not_the_value() {
        let message = LlmError::ProviderNotConfigured.to_string();
        assert!(message.contains("OpenAI API key not configured"));
        assert!(message.contains("STRIDE_OPENAI_API_KEY"));
    }

    #[test]
    fn test_rate_limited_displays_upstream_message_verbatim() {
        let err = LlmError::RateLimited {
            retry_after_ms: 2000,
            message: "Rate limit reached for gpt-4o-mini".to_string(),
        };
        assert_eq!(err.to_string(), "Rate limit reached for gpt-4o-mini");
    }

    #[test]
    fn test_request_failed_display() {
        let err = LlmError::RequestFailed {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("401"));
        assert!(display.contains("Incorrect API key provided"));
    }
}
