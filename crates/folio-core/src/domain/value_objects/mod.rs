//! Domain value objects.

pub mod role;

pub use role::*;
