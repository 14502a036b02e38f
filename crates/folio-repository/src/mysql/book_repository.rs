//! MySQL book repository implementation.

use crate::{traits::BookRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::{AuthorId, Book, BookId, FolioError, FolioResult, NewBook, PageRequest};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL book repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = BookRepository)]
pub struct MySqlBookRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlBookRepository {
    /// Creates a new MySQL book repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a book.
#[derive(Debug, FromRow)]
struct BookRow {
    id: i64,
    title: String,
    cover_text: Option<String>,
    author_id: Option<i64>,
    publication_date: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            id: BookId::new(row.id),
            title: row.title,
            cover_text: row.cover_text,
            author_id: row.author_id.map(AuthorId::new),
            publication_date: row.publication_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl BookRepository for MySqlBookRepository {
    async fn find_by_id(&self, id: BookId) -> FolioResult<Option<Book>> {
        debug!("Finding book by id: {}", id);

        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, cover_text, author_id, publication_date,
                   created_at, updated_at
            FROM books
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn find_paginated(&self, page: PageRequest) -> FolioResult<Vec<Book>> {
        debug!("Finding books, page: {}, limit: {}", page.page, page.limit);

        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, cover_text, author_id, publication_date,
                   created_at, updated_at
            FROM books
            ORDER BY id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(i64::from(page.limit()))
        .bind(page.offset() as i64)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_author(&self, author_id: AuthorId) -> FolioResult<Vec<Book>> {
        debug!("Finding books by author: {}", author_id);

        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, cover_text, author_id, publication_date,
                   created_at, updated_at
            FROM books
            WHERE author_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(author_id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn save(&self, book: &NewBook) -> FolioResult<Book> {
        debug!("Saving new book: {}", book.title);

        // MySQL doesn't support RETURNING, so insert then select
        let result = sqlx::query(
            r#"
            INSERT INTO books (title, cover_text, author_id, publication_date,
                               created_at, updated_at)
            VALUES (?, ?, ?, ?, NOW(), NOW())
            "#,
        )
        .bind(&book.title)
        .bind(&book.cover_text)
        .bind(book.author_id.map(AuthorId::into_inner))
        .bind(&book.publication_date)
        .execute(self.pool.inner())
        .await?;

        let id = BookId::new(result.last_insert_id() as i64);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| FolioError::Internal("Failed to fetch inserted book".to_string()))
    }

    async fn update(&self, book: &Book) -> FolioResult<Book> {
        debug!("Updating book: {}", book.id);

        sqlx::query(
            r#"
            UPDATE books
            SET title = ?, cover_text = ?, author_id = ?, publication_date = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&book.title)
        .bind(&book.cover_text)
        .bind(book.author_id.map(AuthorId::into_inner))
        .bind(&book.publication_date)
        .bind(book.updated_at)
        .bind(book.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(book.id)
            .await?
            .ok_or_else(|| FolioError::Internal("Failed to fetch updated book".to_string()))
    }

    async fn delete(&self, id: BookId) -> FolioResult<bool> {
        debug!("Deleting book: {}", id);

        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> FolioResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count as u64)
    }
}

impl std::fmt::Debug for MySqlBookRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlBookRepository").finish_non_exhaustive()
    }
}
