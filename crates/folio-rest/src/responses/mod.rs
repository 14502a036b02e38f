//! API response types.

use folio_core::{ErrorResponse, FolioError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub FolioError);

impl From<FolioError> for AppError {
    fn from(err: FolioError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(ErrorResponse::from_error(&self.0));
        (status, body).into_response()
    }
}

/// Result type for Axum handlers returning a JSON body.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a 200 response.
pub fn ok<T: serde::Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a 204 response.
pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}
