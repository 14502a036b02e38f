//! OpenAPI documentation configuration.

use crate::controllers::health_controller::HealthResponse;
use folio_core::{AuthorId, BookId, ErrorResponse, FieldError, UserRole};
use folio_service::{
    AuthorResponse, AuthorSummary, BookResponse, BookSummary, CreateAuthorRequest,
    CreateBookRequest, UpdateAuthorRequest, UpdateBookRequest,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Folio API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio API",
        version = "1.0.0",
        description = "RESTful API for the Folio book catalog",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Book endpoints
        crate::controllers::book_controller::list_books,
        crate::controllers::book_controller::get_book,
        crate::controllers::book_controller::create_book,
        crate::controllers::book_controller::update_book,
        crate::controllers::book_controller::delete_book,
        // Author endpoints
        crate::controllers::author_controller::list_authors,
        crate::controllers::author_controller::get_author,
        crate::controllers::author_controller::create_author,
        crate::controllers::author_controller::update_author,
        crate::controllers::author_controller::delete_author,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            // Core types
            BookId,
            AuthorId,
            UserRole,
            ErrorResponse,
            FieldError,
            // Book DTOs
            BookResponse,
            AuthorSummary,
            CreateBookRequest,
            UpdateBookRequest,
            // Author DTOs
            AuthorResponse,
            BookSummary,
            CreateAuthorRequest,
            UpdateAuthorRequest,
            // Health
            HealthResponse,
        )
    ),
    tags(
        (name = "books", description = "Book catalog endpoints"),
        (name = "authors", description = "Author management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_referenced_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components should be present");
        for name in [
            "BookResponse",
            "AuthorResponse",
            "CreateBookRequest",
            "ErrorResponse",
            "HealthResponse",
        ] {
            assert!(
                components.schemas.contains_key(name),
                "schema {name} is referenced by a path but not registered"
            );
        }
    }
}
