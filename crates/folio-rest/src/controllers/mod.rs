//! HTTP controllers.

pub mod author_controller;
pub mod book_controller;
pub mod health_controller;
