//! Author DTOs for API requests and responses.

use folio_core::{Author, AuthorId, Book, BookId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Book fields embedded in an author response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub id: BookId,
    pub title: String,
    pub cover_text: Option<String>,
    pub publication_date: String,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            cover_text: book.cover_text.clone(),
            publication_date: book.publication_date.clone(),
        }
    }
}

/// Author representation returned by the API, including the author's books.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: AuthorId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub books: Vec<BookSummary>,
}

impl AuthorResponse {
    /// Build a response from an author and the books referencing them.
    #[must_use]
    pub fn from_author(author: &Author, books: &[Book]) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            books: books.iter().map(BookSummary::from).collect(),
        }
    }
}

/// Request payload for creating an author.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorRequest {
    #[validate(length(max = 255, message = "First name must be at most 255 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 255, message = "Last name must be at most 255 characters"))]
    pub last_name: Option<String>,

    /// Ids of existing books to attach to the new author. Unknown ids are
    /// silently skipped.
    #[serde(default)]
    pub id_books: Vec<i64>,
}

/// Request payload for updating an author.
///
/// `idBooks` is treated as the complete desired book set: books not listed
/// are detached, listed ones are attached. An absent field means an empty
/// set, which detaches every book.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorRequest {
    #[validate(length(max = 255, message = "First name must be at most 255 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 255, message = "Last name must be at most 255 characters"))]
    pub last_name: Option<String>,

    #[serde(default)]
    pub id_books: Vec<i64>,
}

impl UpdateAuthorRequest {
    /// Apply the provided name fields to an existing author. Book links are
    /// reconciled by the service.
    pub fn apply_to(&self, author: &mut Author) {
        if let Some(first_name) = &self.first_name {
            author.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &self.last_name {
            author.last_name = Some(last_name.clone());
        }
        author.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use folio_core::validation::ValidateExt;

    #[test]
    fn test_create_request_defaults_id_books() {
        let request: CreateAuthorRequest =
            serde_json::from_str(r#"{"firstName": "Frank"}"#).unwrap();
        assert_eq!(request.first_name.as_deref(), Some("Frank"));
        assert!(request.id_books.is_empty());
        assert!(request.validate_request().is_ok());
    }

    #[test]
    fn test_create_request_reads_id_books() {
        let request: CreateAuthorRequest =
            serde_json::from_str(r#"{"lastName": "Herbert", "idBooks": [1, 2]}"#).unwrap();
        assert_eq!(request.id_books, vec![1, 2]);
    }

    #[test]
    fn test_update_request_applies_names() {
        let now = Utc::now();
        let mut author = Author {
            id: AuthorId::new(1),
            first_name: Some("Fank".to_string()),
            last_name: None,
            created_at: now,
            updated_at: now,
        };
        let request: UpdateAuthorRequest =
            serde_json::from_str(r#"{"firstName": "Frank", "lastName": "Herbert"}"#).unwrap();
        request.apply_to(&mut author);
        assert_eq!(author.first_name.as_deref(), Some("Frank"));
        assert_eq!(author.last_name.as_deref(), Some("Herbert"));
    }

    #[test]
    fn test_author_response_serializes_camel_case() {
        let now = Utc::now();
        let author = Author {
            id: AuthorId::new(3),
            first_name: Some("Frank".to_string()),
            last_name: Some("Herbert".to_string()),
            created_at: now,
            updated_at: now,
        };
        let book = Book {
            id: BookId::new(9),
            title: "Dune".to_string(),
            cover_text: None,
            author_id: Some(author.id),
            publication_date: "1965-08-01".to_string(),
            created_at: now,
            updated_at: now,
        };
        let response = AuthorResponse::from_author(&author, &[book]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["firstName"], "Frank");
        assert_eq!(json["books"][0]["publicationDate"], "1965-08-01");
    }
}
