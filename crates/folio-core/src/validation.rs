//! Validation utilities.

use crate::{FieldError, FolioError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `FolioError` on failure.
    fn validate_request(&self) -> Result<(), FolioError> {
        self.validate().map_err(validation_errors_to_folio_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `FolioError`, keeping every
/// field-level violation.
#[must_use]
pub fn validation_errors_to_folio_error(errors: ValidationErrors) -> FolioError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    FolioError::validation_with_fields(message, field_errors)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates a `YYYY-MM-DD` publication date string.
    pub fn publication_date(value: &str) -> Result<(), ValidationError> {
        if chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
            return Err(ValidationError::new("invalid_date"));
        }
        Ok(())
    }
}
