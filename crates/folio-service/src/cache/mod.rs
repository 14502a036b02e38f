//! Caching layer with tag-based invalidation.

pub mod cache_interface;
pub mod cache_keys;
pub mod memory_cache;
pub mod redis_cache;

pub use cache_interface::*;
pub use memory_cache::*;
pub use redis_cache::*;
