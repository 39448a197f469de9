//! REST client for the Stride relay.

use crate::config::TuiConfig;
use std::time::Duration;
use stride_api::routes::chat::ChatRequest;
use stride_api::routes::health::HealthResponse;
use stride_api::ErrorBody;
use stride_core::ChatMessage;
use stride_llm::CompletionResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Relay error ({status}): {message}")]
    Relay { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

/// HTTP client for the relay's two endpoints.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: config.relay_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET /api/health
    pub async fn health(&self) -> Result<HealthResponse, ApiClientError> {
        let url = format!("{}/api/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(relay_error(status.as_u16(), response.text().await.ok()));
        }
        Ok(response.json().await?)
    }

    /// POST /api/chat - one round trip, no retry. Returns the assistant's
    /// reply text extracted from the relayed envelope.
    pub async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        goals_context: String,
    ) -> Result<String, ApiClientError> {
        let url = format!("{}/api/chat", self.base_url);
        let body = ChatRequest {
            messages,
            goals_context,
        };
        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(relay_error(status.as_u16(), response.text().await.ok()));
        }

        let envelope: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ApiClientError::InvalidResponse(e.to_string()))?;
        envelope
            .reply_text()
            .map(str::to_string)
            .ok_or_else(|| ApiClientError::InvalidResponse("Envelope has no choices".to_string()))
    }
}

/// Interpret a non-success relay body, which should be `{ "error": ... }`.
fn relay_error(status: u16, body: Option<String>) -> ApiClientError {
    let message = body
        .as_deref()
        .and_then(|text| serde_json::from_str::<ErrorBody>(text).ok())
        .map(|parsed| parsed.error)
        .or(body)
        .unwrap_or_else(|| "Unknown relay error".to_string());
    ApiClientError::Relay { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_error_parses_contract_body() {
        let err = relay_error(500, Some("{\"error\": \"OpenAI API key not configured\"}".into()));
        match err {
            ApiClientError::Relay { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "OpenAI API key not configured");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_relay_error_falls_back_to_raw_body() {
        let err = relay_error(502, Some("bad gateway".into()));
        match err {
            ApiClientError::Relay { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "bad gateway");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let config = TuiConfig {
            relay_base_url: "http://localhost:3001/".to_string(),
            ..TuiConfig::default()
        };
        let client = RelayClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:3001");
    }
}
