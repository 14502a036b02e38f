//! Book service implementation.

use crate::book_service::BookService;
use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::{BookResponse, CreateBookRequest, UpdateBookRequest};
use folio_core::{
    validation::ValidateExt, Author, AuthorId, Book, BookId, FolioError, FolioResult, NewBook,
    PageRequest, DEFAULT_PUBLICATION_DATE,
};
use folio_repository::{AuthorRepository, BookRepository};
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Book service backed by the repositories and the tagged cache.
#[derive(Component)]
#[shaku(interface = BookService)]
pub struct BookServiceComponent {
    #[shaku(inject)]
    book_repository: Arc<dyn BookRepository>,
    #[shaku(inject)]
    author_repository: Arc<dyn AuthorRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
}

impl BookServiceComponent {
    /// Creates the service from explicit dependencies.
    #[must_use]
    pub fn new(
        book_repository: Arc<dyn BookRepository>,
        author_repository: Arc<dyn AuthorRepository>,
        cache: Arc<dyn CacheInterface>,
    ) -> Self {
        Self {
            book_repository,
            author_repository,
            cache,
        }
    }

    /// Resolves a client-supplied author id. Negative ids mean "no author";
    /// ids that match no author are silently treated the same way.
    async fn resolve_author(&self, id_author: i64) -> FolioResult<Option<AuthorId>> {
        if id_author < 0 {
            return Ok(None);
        }
        let author = self
            .author_repository
            .find_by_id(AuthorId::new(id_author))
            .await?;
        Ok(author.map(|a| a.id))
    }

    async fn author_of(&self, book: &Book) -> FolioResult<Option<Author>> {
        match book.author_id {
            Some(author_id) => self.author_repository.find_by_id(author_id).await,
            None => Ok(None),
        }
    }

    async fn to_response(&self, book: &Book) -> FolioResult<BookResponse> {
        let author = self.author_of(book).await?;
        Ok(BookResponse::from_book(book, author.as_ref()))
    }
}

#[async_trait]
impl BookService for BookServiceComponent {
    async fn list_books(&self, page: PageRequest) -> FolioResult<Vec<BookResponse>> {
        let key = cache_keys::book_list(page.page, page.limit);
        debug!("Listing books with cache key '{}'", key);

        let book_repository = Arc::clone(&self.book_repository);
        let author_repository = Arc::clone(&self.author_repository);

        self.cache
            .get_or_set(
                &key,
                cache_keys::BOOK_LIST_TTL,
                &[cache_keys::BOOKS_CACHE_TAG],
                || async move {
                    let books = book_repository.find_paginated(page).await?;
                    let mut responses = Vec::with_capacity(books.len());
                    for book in &books {
                        let author = match book.author_id {
                            Some(author_id) => author_repository.find_by_id(author_id).await?,
                            None => None,
                        };
                        responses.push(BookResponse::from_book(book, author.as_ref()));
                    }
                    Ok(responses)
                },
            )
            .await
    }

    async fn get_book(&self, id: BookId) -> FolioResult<BookResponse> {
        let book = self
            .book_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| FolioError::not_found("Book", id))?;
        self.to_response(&book).await
    }

    async fn create_book(&self, request: CreateBookRequest) -> FolioResult<BookResponse> {
        request.validate_request()?;

        self.cache
            .invalidate_tags(&[cache_keys::BOOKS_CACHE_TAG])
            .await?;

        let author_id = self.resolve_author(request.id_author).await?;
        let draft = NewBook {
            title: request.title,
            cover_text: request.cover_text,
            author_id,
            publication_date: request
                .publication_date
                .unwrap_or_else(|| DEFAULT_PUBLICATION_DATE.to_string()),
        };

        let book = self.book_repository.save(&draft).await?;
        info!("Created book {} '{}'", book.id, book.title);
        self.to_response(&book).await
    }

    async fn update_book(
        &self,
        id: BookId,
        request: UpdateBookRequest,
    ) -> FolioResult<BookResponse> {
        request.validate_request()?;

        let mut book = self
            .book_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| FolioError::not_found("Book", id))?;

        self.cache
            .invalidate_tags(&[cache_keys::BOOKS_CACHE_TAG])
            .await?;

        request.apply_to(&mut book);
        // The author link is always re-resolved from the request; an absent
        // or sentinel idAuthor detaches the author.
        book.author_id = self.resolve_author(request.id_author).await?;

        let book = self.book_repository.update(&book).await?;
        info!("Updated book {}", book.id);
        self.to_response(&book).await
    }

    async fn delete_book(&self, id: BookId) -> FolioResult<()> {
        self.book_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| FolioError::not_found("Book", id))?;

        self.cache
            .invalidate_tags(&[cache_keys::BOOKS_CACHE_TAG])
            .await?;

        self.book_repository.delete(id).await?;
        info!("Deleted book {}", id);
        Ok(())
    }
}
