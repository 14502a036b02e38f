//! Author service trait.

use crate::dto::{AuthorResponse, CreateAuthorRequest, UpdateAuthorRequest};
use folio_core::{AuthorId, FolioResult, Interface};
use async_trait::async_trait;

/// Business operations on authors.
#[async_trait]
pub trait AuthorService: Interface + Send + Sync {
    /// List every author with their books.
    async fn list_authors(&self) -> FolioResult<Vec<AuthorResponse>>;

    /// Fetch a single author by id.
    async fn get_author(&self, id: AuthorId) -> FolioResult<AuthorResponse>;

    /// Create a new author, optionally attaching existing books.
    async fn create_author(&self, request: CreateAuthorRequest) -> FolioResult<AuthorResponse>;

    /// Update an author and reconcile their book set.
    async fn update_author(
        &self,
        id: AuthorId,
        request: UpdateAuthorRequest,
    ) -> FolioResult<AuthorResponse>;

    /// Delete an author, detaching their books first.
    async fn delete_author(&self, id: AuthorId) -> FolioResult<()>;
}
