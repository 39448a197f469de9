//! Chat Relay Route
//!
//! `POST /api/chat` takes the conversation transcript (greeting already
//! stripped client-side) plus the preformatted goals summary, prepends the
//! goal-planning system instruction, and forwards one request to the
//! OpenAI API. The upstream success envelope is relayed verbatim; every
//! failure becomes `{ "error": ... }` with the status the taxonomy in
//! [`crate::error`] assigns.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use stride_core::ChatMessage;
use stride_llm::{CompletionRequest, LlmError, OpenAiClient};

use crate::config::ApiConfig;
use crate::error::ApiResult;

// ============================================================================
// SHARED STATE
// ============================================================================

/// Shared state for the chat route.
///
/// The client is `None` when no credential was configured; the handler
/// reports that per request so the process keeps serving.
pub struct ChatState {
    pub client: Option<OpenAiClient>,
    pub model: String,
    pub max_tokens: i32,
    pub temperature: f32,
}

impl ChatState {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            client: config
                .openai_api_key
                .as_ref()
                .map(|key| OpenAiClient::new(key.clone())),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

// ============================================================================
// TYPES
// ============================================================================

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChatRequest {
    /// Conversation so far, excluding the client's fixed greeting.
    #[schema(value_type = Vec<Object>)]
    pub messages: Vec<ChatMessage>,
    /// Preformatted text block describing the user's goals, one per line.
    #[serde(rename = "goalsContext")]
    pub goals_context: String,
}

// ============================================================================
// PROMPT CONSTRUCTION
// ============================================================================

/// Build the single system instruction, embedding the goals summary verbatim.
fn build_system_instruction(goals_context: &str) -> String {
    format!(
        "You are a helpful goal planning assistant. The user has the following goals:\n\n\
         {}\n\n\
         Help them create actionable plans, break down complex goals, suggest strategies, \
         and provide motivation. Be concise, practical, and encouraging.",
        goals_context
    )
}

/// Assemble the upstream request: exactly one system message followed by
/// the transcript in its original order.
pub fn build_completion_request(state: &ChatState, request: &ChatRequest) -> CompletionRequest {
    let mut messages = Vec::with_capacity(request.messages.len() + 1);
    messages.push(ChatMessage::system(build_system_instruction(
        &request.goals_context,
    )));
    messages.extend(request.messages.iter().cloned());

    CompletionRequest {
        model: state.model.clone(),
        messages,
        max_tokens: Some(state.max_tokens),
        temperature: Some(state.temperature),
    }
}

// ============================================================================
// ROUTE HANDLER
// ============================================================================

/// POST /api/chat - forward one chat request to the OpenAI API
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "Chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Upstream response envelope, relayed verbatim"),
        (status = 429, description = "Upstream rate limit", body = crate::error::ErrorBody),
        (status = 500, description = "Missing credential or internal fault", body = crate::error::ErrorBody),
        (status = 502, description = "Upstream error, status passed through", body = crate::error::ErrorBody),
    ),
)]
pub async fn relay_chat(
    State(state): State<Arc<ChatState>>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    tracing::info!(
        message_count = request.messages.len(),
        key_present = state.client.is_some(),
        "Received chat request"
    );

    let client = state
        .client
        .as_ref()
        .ok_or(LlmError::ProviderNotConfigured)?;

    let completion = build_completion_request(&state, &request);
    let envelope = client.chat(completion).await.map_err(|err| {
        tracing::error!(error = %err, "Chat relay failed");
        err
    })?;

    tracing::info!("Upstream response received");
    Ok(Json(envelope))
}

/// Create the chat router.
pub fn create_router(state: Arc<ChatState>) -> Router {
    Router::new().route("/chat", post(relay_chat)).with_state(state)
}
