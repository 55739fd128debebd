//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::HealthResponse;
use crate::handlers::update_handler::UpdateRequest;
use domain::MessageResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::update_handler::update_system,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            UpdateRequest,
            MessageResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "System", description = "System update and health endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/update-system"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
