//! Request extractors.

pub mod pagination;
pub mod role;
pub mod validated;

pub use pagination::*;
pub use role::*;
pub use validated::*;
