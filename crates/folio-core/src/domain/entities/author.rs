//! Author entity.

use crate::AuthorId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An author in the catalog.
///
/// The author does not store back-references to its books; the books
/// collection is derived by querying books for this author's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Store-assigned identifier
    pub id: AuthorId,
    /// First name
    pub first_name: Option<String>,
    /// Last name
    pub last_name: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Author {
    /// Refreshes the update timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// An author draft that has not been persisted yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAuthor {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_touch_advances_updated_at() {
        let now = Utc::now();
        let mut author = Author {
            id: AuthorId::new(1),
            first_name: Some("Franz".to_string()),
            last_name: Some("Kafka".to_string()),
            created_at: now,
            updated_at: now,
        };
        author.touch();
        assert!(author.updated_at >= now);
    }

    #[test]
    fn test_new_author_default() {
        let draft = NewAuthor::default();
        assert!(draft.first_name.is_none());
        assert!(draft.last_name.is_none());
    }
}
