//! Author controller.

use crate::{
    extractors::ValidatedJson,
    responses::{no_content, ok, ApiResult, AppError},
    state::AppState,
};
use folio_core::{AuthorId, FolioError};
use folio_service::{AuthorResponse, CreateAuthorRequest, UpdateAuthorRequest};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::debug;

/// Creates the author router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_authors).post(create_author))
        .route(
            "/:id",
            get(get_author).put(update_author).delete(delete_author),
        )
}

/// List all authors.
#[utoipa::path(
    get,
    path = "/api/authors",
    tag = "authors",
    responses(
        (status = 200, description = "All authors with their books", body = [AuthorResponse])
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> ApiResult<Vec<AuthorResponse>> {
    debug!("List authors request");
    let response = state.author_service.list_authors().await?;
    ok(response)
}

/// Get an author by id.
#[utoipa::path(
    get,
    path = "/api/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 200, description = "The author", body = AuthorResponse),
        (status = 404, description = "Author not found", body = folio_core::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<AuthorResponse> {
    debug!("Get author request: {}", id);
    let response = state
        .author_service
        .get_author(parse_author_id(&id)?)
        .await?;
    ok(response)
}

/// Create a new author.
#[utoipa::path(
    post,
    path = "/api/authors",
    tag = "authors",
    request_body = CreateAuthorRequest,
    responses(
        (status = 201, description = "Author created", body = AuthorResponse,
            headers(("Location" = String, description = "URL of the new author"))),
        (status = 400, description = "Validation failed", body = folio_core::ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateAuthorRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Create author request");
    let response = state.author_service.create_author(request).await?;
    let location = format!("/api/authors/{}", response.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}

/// Update an existing author.
#[utoipa::path(
    put,
    path = "/api/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author id")),
    request_body = UpdateAuthorRequest,
    responses(
        (status = 200, description = "Author updated", body = AuthorResponse),
        (status = 400, description = "Validation failed", body = folio_core::ErrorResponse),
        (status = 404, description = "Author not found", body = folio_core::ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateAuthorRequest>,
) -> ApiResult<AuthorResponse> {
    debug!("Update author request: {}", id);
    let response = state
        .author_service
        .update_author(parse_author_id(&id)?, request)
        .await?;
    ok(response)
}

/// Delete an author. Their books are kept, with the author reference cleared.
#[utoipa::path(
    delete,
    path = "/api/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found", body = folio_core::ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete author request: {}", id);
    state
        .author_service
        .delete_author(parse_author_id(&id)?)
        .await?;
    Ok(no_content())
}

/// Helper to parse an author id from a path parameter.
fn parse_author_id(id: &str) -> Result<AuthorId, AppError> {
    AuthorId::parse(id).map_err(|_| {
        AppError(FolioError::malformed_input(format!(
            "Invalid author id: {}",
            id
        )))
    })
}
