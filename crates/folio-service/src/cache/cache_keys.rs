//! Cache key generators for consistent key naming.

use std::time::Duration;

/// Tag attached to every cached book listing. Invalidating it evicts all
/// cached (page, limit) variants at once.
pub const BOOKS_CACHE_TAG: &str = "booksCache";

/// TTL for cached book listings.
pub const BOOK_LIST_TTL: Duration = Duration::from_secs(60);

/// Generate the cache key for a page of the book listing.
#[must_use]
pub fn book_list(page: u32, limit: u32) -> String {
    format!("getBooks-{}-{}", page, limit)
}
