//! OpenAI chat-completion wire types

use serde::{Deserialize, Serialize};
use stride_core::ChatMessage;

// ============================================================================
// REQUEST TYPES
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

// ============================================================================
// RESPONSE TYPES
// ============================================================================

/// Typed view of the success envelope. The relay forwards the envelope as
/// raw JSON; this type exists for clients that need the reply text.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

impl CompletionResponse {
    /// The assistant's reply text, if the envelope carries one.
    pub fn reply_text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// Upstream error envelope: `{ "error": { "message": ..., ... } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamError {
    pub error: UpstreamErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamErrorDetail {
    pub message: String,
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_absent_optionals() {
        let request = CompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage::user("hi")],
            max_tokens: None,
            temperature: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("max_tokens"));
        assert!(!json.contains("temperature"));
    }

    #[test]
    fn test_request_serializes_sampling_params() {
        let request = CompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: Vec::new(),
            max_tokens: Some(500),
            temperature: Some(0.7),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_tokens"], 500);
        assert_eq!(json["model"], "gpt-4o-mini");
    }

    #[test]
    fn test_completion_response_reply_text() {
        let json = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Start small."}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 3, "total_tokens": 13}
        }"#;
        let response: CompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.reply_text(), Some("Start small."));
    }

    #[test]
    fn test_upstream_error_envelope_parses() {
        let json = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error", "code": "invalid_api_key"}}"#;
        let parsed: UpstreamError = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error.message, "Incorrect API key provided");
        assert_eq!(parsed.error.code.as_deref(), Some("invalid_api_key"));
    }
}
