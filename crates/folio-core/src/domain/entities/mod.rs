//! Domain entities.

pub mod author;
pub mod book;

pub use author::*;
pub use book::*;
