//! MySQL repository implementations.

mod author_repository;
mod book_repository;

pub use author_repository::*;
pub use book_repository::*;
