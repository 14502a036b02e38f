//! # Folio Service
//!
//! Business logic service layer for Folio.
//! Contains the book/author application services, DTO projections, and the
//! tag-aware cache layer.

pub mod author_service;
pub mod book_service;
pub mod cache;
pub mod dto;
pub mod r#impl;

pub use author_service::*;
pub use book_service::*;
pub use cache::*;
pub use dto::*;
pub use r#impl::*;
