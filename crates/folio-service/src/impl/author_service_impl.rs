//! Author service implementation.

use crate::author_service::AuthorService;
use crate::dto::{AuthorResponse, CreateAuthorRequest, UpdateAuthorRequest};
use folio_core::{
    validation::ValidateExt, Author, AuthorId, BookId, FolioError, FolioResult, NewAuthor,
};
use folio_repository::{AuthorRepository, BookRepository};
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Author service backed by the repositories.
///
/// Author mutations never touch the book listing cache; listings embed only
/// the author snapshot captured when the entry was built.
#[derive(Component)]
#[shaku(interface = AuthorService)]
pub struct AuthorServiceComponent {
    #[shaku(inject)]
    author_repository: Arc<dyn AuthorRepository>,
    #[shaku(inject)]
    book_repository: Arc<dyn BookRepository>,
}

impl AuthorServiceComponent {
    /// Creates the service from explicit dependencies.
    #[must_use]
    pub fn new(
        author_repository: Arc<dyn AuthorRepository>,
        book_repository: Arc<dyn BookRepository>,
    ) -> Self {
        Self {
            author_repository,
            book_repository,
        }
    }

    /// Attaches each listed book to the author. Unknown book ids are
    /// silently skipped.
    async fn attach_books(&self, author_id: AuthorId, id_books: &[i64]) -> FolioResult<()> {
        for id in id_books {
            let Some(mut book) = self.book_repository.find_by_id(BookId::new(*id)).await? else {
                debug!("Skipping unknown book id {} for author {}", id, author_id);
                continue;
            };
            book.author_id = Some(author_id);
            book.touch();
            self.book_repository.update(&book).await?;
        }
        Ok(())
    }

    /// Detaches every book currently referencing the author.
    async fn detach_books(&self, author_id: AuthorId) -> FolioResult<()> {
        for mut book in self.book_repository.find_by_author(author_id).await? {
            book.author_id = None;
            book.touch();
            self.book_repository.update(&book).await?;
        }
        Ok(())
    }

    async fn to_response(&self, author: &Author) -> FolioResult<AuthorResponse> {
        let books = self.book_repository.find_by_author(author.id).await?;
        Ok(AuthorResponse::from_author(author, &books))
    }
}

#[async_trait]
impl AuthorService for AuthorServiceComponent {
    async fn list_authors(&self) -> FolioResult<Vec<AuthorResponse>> {
        let authors = self.author_repository.find_all().await?;
        let mut responses = Vec::with_capacity(authors.len());
        for author in &authors {
            responses.push(self.to_response(author).await?);
        }
        Ok(responses)
    }

    async fn get_author(&self, id: AuthorId) -> FolioResult<AuthorResponse> {
        let author = self
            .author_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| FolioError::not_found("Author", id))?;
        self.to_response(&author).await
    }

    async fn create_author(&self, request: CreateAuthorRequest) -> FolioResult<AuthorResponse> {
        request.validate_request()?;

        let draft = NewAuthor {
            first_name: request.first_name,
            last_name: request.last_name,
        };
        let author = self.author_repository.save(&draft).await?;
        self.attach_books(author.id, &request.id_books).await?;

        info!("Created author {}", author.id);
        self.to_response(&author).await
    }

    async fn update_author(
        &self,
        id: AuthorId,
        request: UpdateAuthorRequest,
    ) -> FolioResult<AuthorResponse> {
        request.validate_request()?;

        let mut author = self
            .author_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| FolioError::not_found("Author", id))?;

        request.apply_to(&mut author);
        let author = self.author_repository.update(&author).await?;

        // The request's book list is the complete desired set: detach
        // everything first, then re-attach what is listed.
        self.detach_books(author.id).await?;
        self.attach_books(author.id, &request.id_books).await?;

        info!("Updated author {}", author.id);
        self.to_response(&author).await
    }

    async fn delete_author(&self, id: AuthorId) -> FolioResult<()> {
        self.author_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| FolioError::not_found("Author", id))?;

        // Books outlive their author; only the reference is cleared.
        self.detach_books(id).await?;
        self.author_repository.delete(id).await?;

        info!("Deleted author {}", id);
        Ok(())
    }
}
