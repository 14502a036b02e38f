//! Application state for Axum handlers.

use folio_service::{AuthorService, BookService};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<dyn BookService>,
    pub author_service: Arc<dyn AuthorService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(book_service: Arc<dyn BookService>, author_service: Arc<dyn AuthorService>) -> Self {
        Self {
            book_service,
            author_service,
        }
    }

    /// Creates the application state by resolving services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn BookService> + HasComponent<dyn AuthorService>,
    {
        Self {
            book_service: module.resolve(),
            author_service: module.resolve(),
        }
    }
}
