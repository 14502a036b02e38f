//! MySQL author repository implementation.

use crate::{traits::AuthorRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::{Author, AuthorId, FolioError, FolioResult, NewAuthor};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL author repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = AuthorRepository)]
pub struct MySqlAuthorRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlAuthorRepository {
    /// Creates a new MySQL author repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an author.
#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    first_name: Option<String>,
    last_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Self {
            id: AuthorId::new(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl AuthorRepository for MySqlAuthorRepository {
    async fn find_by_id(&self, id: AuthorId) -> FolioResult<Option<Author>> {
        debug!("Finding author by id: {}", id);

        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, first_name, last_name, created_at, updated_at
            FROM authors
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Author::from))
    }

    async fn find_all(&self) -> FolioResult<Vec<Author>> {
        debug!("Finding all authors");

        let rows = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT id, first_name, last_name, created_at, updated_at
            FROM authors
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn save(&self, author: &NewAuthor) -> FolioResult<Author> {
        debug!("Saving new author");

        let result = sqlx::query(
            r#"
            INSERT INTO authors (first_name, last_name, created_at, updated_at)
            VALUES (?, ?, NOW(), NOW())
            "#,
        )
        .bind(&author.first_name)
        .bind(&author.last_name)
        .execute(self.pool.inner())
        .await?;

        let id = AuthorId::new(result.last_insert_id() as i64);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| FolioError::Internal("Failed to fetch inserted author".to_string()))
    }

    async fn update(&self, author: &Author) -> FolioResult<Author> {
        debug!("Updating author: {}", author.id);

        sqlx::query(
            r#"
            UPDATE authors
            SET first_name = ?, last_name = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&author.first_name)
        .bind(&author.last_name)
        .bind(author.updated_at)
        .bind(author.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(author.id)
            .await?
            .ok_or_else(|| FolioError::Internal("Failed to fetch updated author".to_string()))
    }

    async fn delete(&self, id: AuthorId) -> FolioResult<bool> {
        debug!("Deleting author: {}", id);

        // The FK on books.author_id is ON DELETE SET NULL, so any book still
        // referencing this author keeps its row with the reference cleared.
        let result = sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> FolioResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count as u64)
    }
}

impl std::fmt::Debug for MySqlAuthorRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlAuthorRepository").finish_non_exhaustive()
    }
}
