//! Book service trait.

use crate::dto::{BookResponse, CreateBookRequest, UpdateBookRequest};
use folio_core::{BookId, FolioResult, Interface, PageRequest};
use async_trait::async_trait;

/// Business operations on books.
#[async_trait]
pub trait BookService: Interface + Send + Sync {
    /// List a page of books, served from the cache when possible.
    async fn list_books(&self, page: PageRequest) -> FolioResult<Vec<BookResponse>>;

    /// Fetch a single book by id.
    async fn get_book(&self, id: BookId) -> FolioResult<BookResponse>;

    /// Create a new book and invalidate the cached listings.
    async fn create_book(&self, request: CreateBookRequest) -> FolioResult<BookResponse>;

    /// Update an existing book and invalidate the cached listings.
    async fn update_book(
        &self,
        id: BookId,
        request: UpdateBookRequest,
    ) -> FolioResult<BookResponse>;

    /// Delete a book and invalidate the cached listings.
    async fn delete_book(&self, id: BookId) -> FolioResult<()>;
}
