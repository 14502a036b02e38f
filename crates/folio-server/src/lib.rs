//! # Folio Server Library
//!
//! Dependency injection configuration, demo data seeding, and startup
//! utilities for the Folio server binary.

pub mod di;
pub mod seed;
pub mod startup;
