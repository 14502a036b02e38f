//! Repository trait definitions.

use async_trait::async_trait;
use folio_core::{Author, AuthorId, Book, BookId, FolioResult, Interface, NewAuthor, NewBook, PageRequest};

/// Book repository trait.
#[async_trait]
pub trait BookRepository: Interface + Send + Sync {
    /// Finds a book by ID.
    async fn find_by_id(&self, id: BookId) -> FolioResult<Option<Book>>;

    /// Finds a page of books. A page past the end yields an empty vec.
    async fn find_paginated(&self, page: PageRequest) -> FolioResult<Vec<Book>>;

    /// Finds all books referencing the given author.
    async fn find_by_author(&self, author_id: AuthorId) -> FolioResult<Vec<Book>>;

    /// Saves a new book and returns it with its store-assigned id.
    async fn save(&self, book: &NewBook) -> FolioResult<Book>;

    /// Updates an existing book.
    async fn update(&self, book: &Book) -> FolioResult<Book>;

    /// Deletes a book by ID. Returns false when no row matched.
    async fn delete(&self, id: BookId) -> FolioResult<bool>;

    /// Counts all books.
    async fn count(&self) -> FolioResult<u64>;
}

/// Author repository trait.
#[async_trait]
pub trait AuthorRepository: Interface + Send + Sync {
    /// Finds an author by ID.
    async fn find_by_id(&self, id: AuthorId) -> FolioResult<Option<Author>>;

    /// Finds all authors.
    async fn find_all(&self) -> FolioResult<Vec<Author>>;

    /// Saves a new author and returns it with its store-assigned id.
    async fn save(&self, author: &NewAuthor) -> FolioResult<Author>;

    /// Updates an existing author.
    async fn update(&self, author: &Author) -> FolioResult<Author>;

    /// Deletes an author by ID. Referencing books are left in place; the
    /// service clears their author references first.
    async fn delete(&self, id: AuthorId) -> FolioResult<bool>;

    /// Counts all authors.
    async fn count(&self) -> FolioResult<u64>;
}
