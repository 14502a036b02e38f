//! Book entity.

use crate::{AuthorId, BookId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default publication date applied when none is provided.
///
/// Matches the value backfilled onto pre-existing rows when the column was
/// introduced.
pub const DEFAULT_PUBLICATION_DATE: &str = "2023-01-01";

/// A book in the catalog.
///
/// The author reference is optional and id-based; deleting an author leaves
/// the book in place with no author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Store-assigned identifier
    pub id: BookId,
    /// Title (required, never blank)
    pub title: String,
    /// Optional cover/back-cover text
    pub cover_text: Option<String>,
    /// Optional reference to the book's author
    pub author_id: Option<AuthorId>,
    /// Publication date as a `YYYY-MM-DD` string
    pub publication_date: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Returns true if the book references an author.
    #[must_use]
    pub const fn has_author(&self) -> bool {
        self.author_id.is_some()
    }

    /// Refreshes the update timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A book draft that has not been persisted yet.
///
/// Persisted [`Book`]s always carry a store-assigned id; drafts never do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub cover_text: Option<String>,
    pub author_id: Option<AuthorId>,
    pub publication_date: String,
}

impl NewBook {
    /// Creates a draft with the default publication date and no author.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cover_text: None,
            author_id: None,
            publication_date: DEFAULT_PUBLICATION_DATE.to_string(),
        }
    }
}
