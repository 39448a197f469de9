//! Stride LLM - OpenAI chat-completion client
//!
//! Thin reqwest wrapper around the OpenAI chat completions endpoint plus
//! the request/response wire types. The relay forwards the upstream
//! success envelope untouched, so the success path stays `serde_json::Value`;
//! only errors get parsed into something typed.

pub mod client;
pub mod error;
pub mod types;

pub use client::OpenAiClient;
pub use error::{LlmError, LlmResult};
pub use types::{Choice, CompletionRequest, CompletionResponse, UpstreamError, UpstreamErrorDetail};
