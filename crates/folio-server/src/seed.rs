//! Demo data seeding.

use folio_core::{FolioResult, NewAuthor, NewBook};
use folio_repository::{AuthorRepository, BookRepository};
use tracing::info;

/// Seeds a handful of authors and books for demos and local development.
///
/// Runs only against an empty catalog; an existing book row skips the whole
/// seed so restarts never duplicate data.
pub async fn seed_demo_data(
    book_repository: &dyn BookRepository,
    author_repository: &dyn AuthorRepository,
) -> FolioResult<()> {
    if book_repository.count().await? > 0 {
        info!("Catalog is not empty, skipping demo data seed");
        return Ok(());
    }

    info!("Seeding demo data...");

    let fixtures: [(&str, &str, &[(&str, &str)]); 3] = [
        (
            "Frank",
            "Herbert",
            &[
                ("Dune", "1965-08-01"),
                ("Dune Messiah", "1969-10-15"),
            ],
        ),
        (
            "Ursula",
            "Le Guin",
            &[
                ("The Left Hand of Darkness", "1969-03-01"),
                ("The Dispossessed", "1974-05-01"),
            ],
        ),
        (
            "Octavia",
            "Butler",
            &[("Kindred", "1979-06-01")],
        ),
    ];

    for (first_name, last_name, books) in fixtures {
        let author = author_repository
            .save(&NewAuthor {
                first_name: Some(first_name.to_string()),
                last_name: Some(last_name.to_string()),
            })
            .await?;

        for (title, publication_date) in books {
            let mut draft = NewBook::new(*title);
            draft.author_id = Some(author.id);
            draft.publication_date = (*publication_date).to_string();
            book_repository.save(&draft).await?;
        }
    }

    // One book without an author, matching what a plain POST produces.
    book_repository.save(&NewBook::new("Anonymous Tales")).await?;

    info!(
        "Demo data seeded: {} authors, {} books",
        author_repository.count().await?,
        book_repository.count().await?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use folio_core::{Author, AuthorId, Book, BookId, PageRequest};
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryBookRepository {
        books: Mutex<BTreeMap<BookId, Book>>,
        next_id: AtomicI64,
    }

    #[async_trait]
    impl BookRepository for InMemoryBookRepository {
        async fn find_by_id(&self, id: BookId) -> FolioResult<Option<Book>> {
            Ok(self.books.lock().unwrap().get(&id).cloned())
        }

        async fn find_paginated(&self, page: PageRequest) -> FolioResult<Vec<Book>> {
            Ok(self
                .books
                .lock()
                .unwrap()
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
                .unwrap()
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
            self.books.lock().unwrap().insert(id, book.clone());
            Ok(book)
        }

        async fn update(&self, book: &Book) -> FolioResult<Book> {
            self.books.lock().unwrap().insert(book.id, book.clone());
            Ok(book.clone())
        }

        async fn delete(&self, id: BookId) -> FolioResult<bool> {
            Ok(self.books.lock().unwrap().remove(&id).is_some())
        }

        async fn count(&self) -> FolioResult<u64> {
            Ok(self.books.lock().unwrap().len() as u64)
        }
    }

    #[derive(Default)]
    struct InMemoryAuthorRepository {
        authors: Mutex<BTreeMap<AuthorId, Author>>,
        next_id: AtomicI64,
    }

    #[async_trait]
    impl AuthorRepository for InMemoryAuthorRepository {
        async fn find_by_id(&self, id: AuthorId) -> FolioResult<Option<Author>> {
            Ok(self.authors.lock().unwrap().get(&id).cloned())
        }

        async fn find_all(&self) -> FolioResult<Vec<Author>> {
            Ok(self.authors.lock().unwrap().values().cloned().collect())
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
            self.authors.lock().unwrap().insert(id, author.clone());
            Ok(author)
        }

        async fn update(&self, author: &Author) -> FolioResult<Author> {
            self.authors
                .lock()
                .unwrap()
                .insert(author.id, author.clone());
            Ok(author.clone())
        }

        async fn delete(&self, id: AuthorId) -> FolioResult<bool> {
            Ok(self.authors.lock().unwrap().remove(&id).is_some())
        }

        async fn count(&self) -> FolioResult<u64> {
            Ok(self.authors.lock().unwrap().len() as u64)
        }
    }

    #[tokio::test]
    async fn test_seed_populates_empty_catalog() {
        let books = InMemoryBookRepository::default();
        let authors = InMemoryAuthorRepository::default();

        seed_demo_data(&books, &authors).await.unwrap();

        assert_eq!(authors.count().await.unwrap(), 3);
        assert_eq!(books.count().await.unwrap(), 6);

        // Every seeded author has at least one book.
        for author in authors.find_all().await.unwrap() {
            assert!(!books.find_by_author(author.id).await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let books = InMemoryBookRepository::default();
        let authors = InMemoryAuthorRepository::default();

        seed_demo_data(&books, &authors).await.unwrap();
        seed_demo_data(&books, &authors).await.unwrap();

        assert_eq!(authors.count().await.unwrap(), 3);
        assert_eq!(books.count().await.unwrap(), 6);
    }
}
