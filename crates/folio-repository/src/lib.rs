//! # Folio Repository
//!
//! Data access layer for Folio:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn BookRepository> / Arc<dyn AuthorRepository>
//! MySqlBookRepository / MySqlAuthorRepository   (SQLx / MySQL)
//!   ↓
//! MySQL
//! ```

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
