//! OpenAPI document for the relay surface.

use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::routes::chat::ChatRequest;
use crate::routes::health::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stride Chat Relay",
        description = "Forwards goal-planning chat requests to the OpenAI API while keeping the credential server-side."
    ),
    paths(
        crate::routes::health::health,
        crate::routes::chat::relay_chat,
    ),
    components(schemas(HealthResponse, ChatRequest, ErrorBody)),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Chat", description = "Chat relay"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_both_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/health"));
        assert!(doc.paths.paths.contains_key("/api/chat"));
    }
}
