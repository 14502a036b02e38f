//! Book DTOs for API requests and responses.

// The date rule is renamed on import: the validator derive binds the field's
// value to a local named after the field, which would shadow a bare
// `publication_date` inside the generated code.
use folio_core::{
    validation::rules::{not_blank, publication_date as valid_publication_date},
    Author, AuthorId, Book, BookId,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Sentinel used by clients to say "no author".
fn default_id_author() -> i64 {
    -1
}

/// Author fields embedded in a book response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub id: AuthorId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<&Author> for AuthorSummary {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
        }
    }
}

/// Book representation returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: BookId,
    pub title: String,
    pub cover_text: Option<String>,
    pub author: Option<AuthorSummary>,
    pub publication_date: String,
}

impl BookResponse {
    /// Build a response from a book and its resolved author, if any.
    #[must_use]
    pub fn from_book(book: &Book, author: Option<&Author>) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            cover_text: book.cover_text.clone(),
            author: author.map(AuthorSummary::from),
            publication_date: book.publication_date.clone(),
        }
    }
}

/// Request payload for creating a book.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[validate(
        custom(function = not_blank, message = "Please enter a title."),
        length(max = 255, message = "Title must be at most 255 characters")
    )]
    pub title: String,

    pub cover_text: Option<String>,

    #[validate(custom(
        function = valid_publication_date,
        message = "Publication date must be in YYYY-MM-DD format"
    ))]
    pub publication_date: Option<String>,

    /// Id of the author to attach. `-1` (the default) means no author;
    /// an unknown id is silently treated the same way.
    #[serde(default = "default_id_author")]
    pub id_author: i64,
}

/// Request payload for updating a book.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    #[validate(
        custom(function = not_blank, message = "Please enter a title."),
        length(max = 255, message = "Title must be at most 255 characters")
    )]
    pub title: Option<String>,

    pub cover_text: Option<String>,

    #[validate(custom(
        function = valid_publication_date,
        message = "Publication date must be in YYYY-MM-DD format"
    ))]
    pub publication_date: Option<String>,

    /// Id of the author to attach; `-1` or absent detaches the author.
    #[serde(default = "default_id_author")]
    pub id_author: i64,
}

impl UpdateBookRequest {
    /// Apply the provided fields to an existing book. The author link is
    /// resolved by the service, not here.
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(cover_text) = &self.cover_text {
            book.cover_text = Some(cover_text.clone());
        }
        if let Some(publication_date) = &self.publication_date {
            book.publication_date = publication_date.clone();
        }
        book.touch();
    }
}
