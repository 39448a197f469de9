//! Stride API - Chat Relay
//!
//! Stateless HTTP layer between the Stride client and the OpenAI chat
//! completions API. Its whole job is to keep the API credential out of the
//! client, inject the goal-planning system instruction, and forward one
//! request per call. No retry, no caching, no shared mutable state.

pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorBody};
pub use openapi::ApiDoc;
pub use routes::create_api_router;
