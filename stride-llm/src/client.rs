//! OpenAI HTTP client

use crate::error::{LlmError, LlmResult};
use crate::types::{CompletionRequest, UpstreamError};
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for the OpenAI chat completions endpoint.
///
/// One best-effort request per call: no retry, no backoff, no caching.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the endpoint base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Send a chat completion request and return the upstream envelope
    /// as raw JSON, so callers can relay it verbatim.
    pub async fn chat(&self, request: CompletionRequest) -> LlmResult<serde_json::Value> {
        self.request("chat/completions", request).await
    }

    /// Make an API request against `endpoint`.
    pub async fn request<Req: Serialize, Res: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Req,
    ) -> LlmResult<Res> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        let retry_after_ms = parse_retry_after_ms(response.headers()).unwrap_or(0);

        if status.is_success() {
            response.json().await.map_err(|e| LlmError::InvalidResponse {
                reason: format!("Failed to parse response: {}", e),
            })
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = match serde_json::from_str::<UpstreamError>(&error_text) {
                Ok(envelope) => envelope.error.message,
                Err(_) => error_text,
            };

            Err(match status {
                StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited {
                    retry_after_ms,
                    message,
                },
                _ => LlmError::RequestFailed {
                    status: status.as_u16(),
                    message,
                },
            })
        }
    }
}

fn parse_retry_after_ms(headers: &reqwest::header::HeaderMap) -> Option<i64> {
    headers
        .get("retry-after")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<f64>().ok())
        .map(|seconds| (seconds * 1000.0) as i64)
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue};

    #[test]
    fn test_debug_redacts_api_key() {
        let client = OpenAiClient::new("sk-secret-value");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("sk-secret-value"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let client = OpenAiClient::new("key").with_base_url("http://localhost:9000/v1/");
        assert!(format!("{:?}", client).contains("http://localhost:9000/v1"));
    }

    #[test]
    fn test_parse_retry_after_seconds() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("2"));
        assert_eq!(parse_retry_after_ms(&headers), Some(2000));

        headers.insert("retry-after", HeaderValue::from_static("0.5"));
        assert_eq!(parse_retry_after_ms(&headers), Some(500));

        let empty = HeaderMap::new();
        assert_eq!(parse_retry_after_ms(&empty), None);
    }
}
