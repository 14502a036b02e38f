//! Book catalog controller.

use crate::{
    extractors::{PaginationQuery, RequestRole, ValidatedJson, ValidatedJsonRejection},
    responses::{no_content, ok, ApiResult, AppError},
    state::AppState,
};
use folio_core::{BookId, FolioError, UserRole};
use folio_service::{BookResponse, CreateBookRequest, UpdateBookRequest};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::debug;

/// Creates the book router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/:id", get(get_book).put(update_book).delete(delete_book))
}

/// List a page of books.
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    params(
        ("page" = Option<u32>, Query, description = "1-indexed page number"),
        ("limit" = Option<u32>, Query, description = "Page size (max 100)")
    ),
    responses(
        (status = 200, description = "A page of books", body = [BookResponse])
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<Vec<BookResponse>> {
    debug!("List books request");
    let response = state.book_service.list_books(pagination.into()).await?;
    ok(response)
}

/// Get a book by id.
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book", body = BookResponse),
        (status = 404, description = "Book not found", body = folio_core::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<BookResponse> {
    debug!("Get book request: {}", id);
    let response = state.book_service.get_book(parse_book_id(&id)?).await?;
    ok(response)
}

/// Create a new book (admin only).
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created", body = BookResponse,
            headers(("Location" = String, description = "URL of the new book"))),
        (status = 400, description = "Validation failed", body = folio_core::ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = folio_core::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    role: RequestRole,
    request: Result<ValidatedJson<CreateBookRequest>, ValidatedJsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // The role gate fires before the body is even looked at, so a
    // non-elevated caller gets 403 no matter what they posted.
    role.require(UserRole::Admin)?;

    let ValidatedJson(request) = request.map_err(FolioError::from)?;
    debug!("Create book request: {}", request.title);

    let response = state.book_service.create_book(request).await?;
    let location = format!("/api/books/{}", response.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}

/// Update an existing book.
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Validation failed", body = folio_core::ErrorResponse),
        (status = 404, description = "Book not found", body = folio_core::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateBookRequest>,
) -> ApiResult<BookResponse> {
    debug!("Update book request: {}", id);
    let response = state
        .book_service
        .update_book(parse_book_id(&id)?, request)
        .await?;
    ok(response)
}

/// Delete a book.
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = folio_core::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete book request: {}", id);
    state.book_service.delete_book(parse_book_id(&id)?).await?;
    Ok(no_content())
}

/// Helper to parse a book id from a path parameter.
fn parse_book_id(id: &str) -> Result<BookId, AppError> {
    BookId::parse(id)
        .map_err(|_| AppError(FolioError::malformed_input(format!("Invalid book id: {}", id))))
}
