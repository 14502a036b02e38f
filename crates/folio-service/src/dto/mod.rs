//! Data transfer objects for the service layer.

pub mod author_dto;
pub mod book_dto;

pub use author_dto::*;
pub use book_dto::*;
