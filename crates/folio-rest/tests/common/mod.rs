//! Shared test harness: an app wired to in-memory repositories.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use chrono::Utc;
use folio_config::ServerConfig;
use folio_core::{Author, AuthorId, Book, BookId, FolioResult, NewAuthor, NewBook, PageRequest};
use folio_repository::{AuthorRepository, BookRepository};
use folio_rest::{create_router_with_state, AppState};
use folio_service::{
    AuthorServiceComponent, BookServiceComponent, CacheInterface, MemoryCacheService,
};
use http_body_util::BodyExt;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

#[derive(Default)]
pub struct InMemoryBookRepository {
    books: Mutex<BTreeMap<BookId, Book>>,
    next_id: AtomicI64,
    pub find_paginated_calls: AtomicUsize,
}

impl InMemoryBookRepository {
    pub fn paginated_calls(&self) -> usize {
        self.find_paginated_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.books.lock().len()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_by_id(&self, id: BookId) -> FolioResult<Option<Book>> {
        Ok(self.books.lock().get(&id).cloned())
    }

    async fn find_paginated(&self, page: PageRequest) -> FolioResult<Vec<Book>> {
        self.find_paginated_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .books
            .lock()
            .values()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn find_by_author(&self, author_id: AuthorId) -> FolioResult<Vec<Book>> {
        Ok(self
            .books
            .lock()
            .values()
            .filter(|b| b.author_id == Some(author_id))
            .cloned()
            .collect())
    }

    async fn save(&self, book: &NewBook) -> FolioResult<Book> {
        let id = BookId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let now = Utc::now();
        let book = Book {
            id,
            title: book.title.clone(),
            cover_text: book.cover_text.clone(),
            author_id: book.author_id,
            publication_date: book.publication_date.clone(),
            created_at: now,
            updated_at: now,
        };
        self.books.lock().insert(id, book.clone());
        Ok(book)
    }

    async fn update(&self, book: &Book) -> FolioResult<Book> {
        self.books.lock().insert(book.id, book.clone());
        Ok(book.clone())
    }

    async fn delete(&self, id: BookId) -> FolioResult<bool> {
        Ok(self.books.lock().remove(&id).is_some())
    }

    async fn count(&self) -> FolioResult<u64> {
        Ok(self.books.lock().len() as u64)
    }
}

#[derive(Default)]
pub struct InMemoryAuthorRepository {
    authors: Mutex<BTreeMap<AuthorId, Author>>,
    next_id: AtomicI64,
}

impl InMemoryAuthorRepository {
    pub fn len(&self) -> usize {
        self.authors.lock().len()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: AuthorId) -> FolioResult<Option<Author>> {
        Ok(self.authors.lock().get(&id).cloned())
    }

    async fn find_all(&self) -> FolioResult<Vec<Author>> {
        Ok(self.authors.lock().values().cloned().collect())
    }

    async fn save(&self, author: &NewAuthor) -> FolioResult<Author> {
        let id = AuthorId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let now = Utc::now();
        let author = Author {
            id,
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            created_at: now,
            updated_at: now,
        };
        self.authors.lock().insert(id, author.clone());
        Ok(author)
    }

    async fn update(&self, author: &Author) -> FolioResult<Author> {
        self.authors.lock().insert(author.id, author.clone());
        Ok(author.clone())
    }

    async fn delete(&self, id: AuthorId) -> FolioResult<bool> {
        Ok(self.authors.lock().remove(&id).is_some())
    }

    async fn count(&self) -> FolioResult<u64> {
        Ok(self.authors.lock().len() as u64)
    }
}

pub struct TestApp {
    pub router: Router,
    pub books: Arc<InMemoryBookRepository>,
    pub authors: Arc<InMemoryAuthorRepository>,
}

/// Builds a full router over in-memory repositories and an in-process cache.
pub fn test_app() -> TestApp {
    let books = Arc::new(InMemoryBookRepository::default());
    let authors = Arc::new(InMemoryAuthorRepository::default());
    let cache = Arc::new(MemoryCacheService::new());

    let book_service = BookServiceComponent::new(
        Arc::clone(&books) as Arc<dyn BookRepository>,
        Arc::clone(&authors) as Arc<dyn AuthorRepository>,
        Arc::clone(&cache) as Arc<dyn CacheInterface>,
    );
    let author_service = AuthorServiceComponent::new(
        Arc::clone(&authors) as Arc<dyn AuthorRepository>,
        Arc::clone(&books) as Arc<dyn BookRepository>,
    );

    let state = AppState::new(Arc::new(book_service), Arc::new(author_service));
    let router = create_router_with_state(state, &ServerConfig::default());

    TestApp {
        router,
        books,
        authors,
    }
}

impl TestApp {
    /// Sends a request and returns the response.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        role: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(role) = role {
            builder = builder.header("x-user-role", role);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.request(Method::GET, uri, None, None).await
    }
}

/// Reads a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Asserts a status and returns the JSON body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
