//! Caller role extractor.

use crate::responses::AppError;
use folio_core::{FolioError, UserRole};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use std::convert::Infallible;

/// Header carrying the caller's role.
pub const ROLE_HEADER: &str = "x-user-role";

/// The caller's role, read from the `X-User-Role` header.
///
/// A missing or unrecognized header value falls back to the regular user
/// role, so extraction itself never fails; role checks happen per handler.
#[derive(Debug, Clone, Copy)]
pub struct RequestRole(pub UserRole);

impl RequestRole {
    /// Requires at least the given role.
    pub fn require(&self, required: UserRole) -> Result<(), AppError> {
        if self.0.has_permission(required) {
            Ok(())
        } else {
            Err(AppError(FolioError::forbidden("You don't have access.")))
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestRole
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let role = parts
            .headers
            .get(ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(UserRole::parse)
            .unwrap_or_default();
        Ok(Self(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_passes_for_sufficient_role() {
        let role = RequestRole(UserRole::Admin);
        assert!(role.require(UserRole::Admin).is_ok());
        assert!(role.require(UserRole::User).is_ok());
    }

    #[test]
    fn test_require_rejects_insufficient_role() {
        let role = RequestRole(UserRole::User);
        let err = role.require(UserRole::Admin).unwrap_err();
        assert!(matches!(err.0, FolioError::Forbidden(_)));
    }
}
