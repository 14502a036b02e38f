//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of Folio.
///
/// This enum covers domain, application, infrastructure, and presentation
/// layer errors with a single taxonomy.
#[derive(Error, Debug)]
pub enum FolioError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error with field-level details
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    /// Request body could not be parsed
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Conflict error (e.g., duplicate entry)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Authorization Errors ============
    /// Unauthorized access
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Forbidden access
    #[error("Forbidden: {0}")]
    Forbidden(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation { .. } | Self::MalformedInput(_) => 400,
            Self::Conflict(_) => 409,
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::Database(_)
            | Self::Configuration(_)
            | Self::Cache(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::MalformedInput(_) => "MALFORMED_INPUT",
            Self::Conflict(_) => "CONFLICT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the message to put on the wire.
    ///
    /// The `Display` form carries a variant prefix for logs
    /// ("Forbidden: ...", "Validation error: ..."); clients get the inner
    /// payload only.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::NotFound { .. } => self.to_string(),
            Self::Validation { message, .. } => message.clone(),
            Self::MalformedInput(message)
            | Self::Conflict(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::Database(message)
            | Self::Configuration(message)
            | Self::Cache(message)
            | Self::Internal(message) => message.clone(),
            Self::Other(err) => err.to_string(),
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error without field details.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Creates a validation error with field-level details.
    #[must_use]
    pub fn validation_with_fields<T: Into<String>>(message: T, errors: Vec<FieldError>) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }

    /// Creates a malformed input error.
    #[must_use]
    pub fn malformed_input<T: Into<String>>(message: T) -> Self {
        Self::MalformedInput(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized<T: Into<String>>(message: T) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates a forbidden error.
    #[must_use]
    pub fn forbidden<T: Into<String>>(message: T) -> Self {
        Self::Forbidden(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for FolioError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => {
                // MySQL 1062 / PostgreSQL 23505 unique violation
                if let Some(code) = db_err.code() {
                    if code == "1062" || code == "23505" {
                        return Self::Conflict(db_err.message().to_string());
                    }
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
    /// Request trace ID for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `FolioError`.
    ///
    /// Validation errors carry their field-level details into the body so
    /// clients see every violation at once.
    #[must_use]
    pub fn from_error(error: &FolioError) -> Self {
        let details = match error {
            FolioError::Validation { errors, .. } if !errors.is_empty() => Some(errors.clone()),
            _ => None,
        };
        Self {
            code: error.error_code().to_string(),
            message: error.client_message(),
            details,
            trace_id: None,
        }
    }

    /// Sets the trace ID.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&FolioError> for ErrorResponse {
    fn from(error: &FolioError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(FolioError::not_found("Book", 1).status_code(), 404);
        assert_eq!(FolioError::validation("blank title").status_code(), 400);
        assert_eq!(FolioError::malformed_input("bad json").status_code(), 400);
        assert_eq!(FolioError::unauthorized("no identity").status_code(), 401);
        assert_eq!(FolioError::forbidden("no permission").status_code(), 403);
        assert_eq!(FolioError::conflict("duplicate").status_code(), 409);
    }

    #[test]
    fn test_error_status_codes_extended() {
        assert_eq!(FolioError::Database("db error".to_string()).status_code(), 500);
        assert_eq!(FolioError::Cache("redis down".to_string()).status_code(), 500);
        assert_eq!(FolioError::internal("oops").status_code(), 500);
        assert_eq!(
            FolioError::Configuration("missing url".to_string()).status_code(),
            500
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(FolioError::not_found("Book", 1).error_code(), "NOT_FOUND");
        assert_eq!(FolioError::validation("bad input").error_code(), "VALIDATION_ERROR");
        assert_eq!(FolioError::malformed_input("bad").error_code(), "MALFORMED_INPUT");
        assert_eq!(FolioError::forbidden("no perm").error_code(), "FORBIDDEN");
        assert_eq!(FolioError::Database("db".to_string()).error_code(), "DATABASE_ERROR");
        assert_eq!(FolioError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_constructors() {
        let not_found = FolioError::not_found("Author", "123");
        assert!(not_found.to_string().contains("Author"));

        let validation = FolioError::validation("invalid field");
        assert!(validation.to_string().contains("invalid field"));

        let forbidden = FolioError::forbidden("no perms");
        assert!(forbidden.to_string().contains("no perms"));
    }

    #[test]
    fn test_client_message_has_no_variant_prefix() {
        let forbidden = FolioError::forbidden("You don't have access.");
        assert_eq!(forbidden.to_string(), "Forbidden: You don't have access.");
        assert_eq!(forbidden.client_message(), "You don't have access.");

        let response = ErrorResponse::from_error(&forbidden);
        assert_eq!(response.message, "You don't have access.");

        let validation = FolioError::validation("title: Please enter a title.");
        assert_eq!(
            validation.client_message(),
            "title: Please enter a title."
        );
    }

    #[test]
    fn test_error_response_from_error() {
        let err = FolioError::not_found("Book", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
        assert!(response.details.is_none());
        assert!(response.trace_id.is_none());
    }

    #[test]
    fn test_error_response_carries_validation_details() {
        let err = FolioError::validation_with_fields(
            "title: must not be blank",
            vec![FieldError {
                field: "title".to_string(),
                message: "Please enter a title.".to_string(),
                code: "not_blank".to_string(),
            }],
        );
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "VALIDATION_ERROR");
        let details = response.details.unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].field, "title");
    }

    #[test]
    fn test_error_response_with_trace_id() {
        let err = FolioError::not_found("Book", 1);
        let response = ErrorResponse::from_error(&err).with_trace_id("trace-123");
        assert_eq!(response.trace_id, Some("trace-123".to_string()));
    }

    #[test]
    fn test_error_response_from_ref() {
        let err = FolioError::not_found("Book", 42);
        let response: ErrorResponse = ErrorResponse::from(&err);
        assert_eq!(response.code, "NOT_FOUND");
    }

    #[test]
    fn test_details_omitted_from_json_when_none() {
        let err = FolioError::not_found("Book", 7);
        let json = serde_json::to_string(&ErrorResponse::from_error(&err)).unwrap();
        assert!(!json.contains("details"));
        assert!(!json.contains("trace_id"));
    }
}
