//! Service implementations.

pub mod author_service_impl;
pub mod book_service_impl;

pub use author_service_impl::*;
pub use book_service_impl::*;

#[cfg(test)]
pub(crate) mod fakes {
    //! In-memory repositories for service tests.

    use async_trait::async_trait;
    use chrono::Utc;
    use folio_core::{
        Author, AuthorId, Book, BookId, FolioResult, NewAuthor, NewBook, PageRequest,
    };
    use folio_repository::{AuthorRepository, BookRepository};
    use parking_lot::Mutex;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

    #[derive(Default)]
    pub struct InMemoryBookRepository {
        books: Mutex<BTreeMap<BookId, Book>>,
        next_id: AtomicI64,
        pub find_paginated_calls: AtomicUsize,
    }

    impl InMemoryBookRepository {
        pub fn new() -> Self {
            Self {
                books: Mutex::new(BTreeMap::new()),
                next_id: AtomicI64::new(0),
                find_paginated_calls: AtomicUsize::new(0),
            }
        }

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
        pub fn new() -> Self {
            Self::default()
        }

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
}
