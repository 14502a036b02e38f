//! Pagination extractor.

use folio_core::PageRequest;
use serde::Deserialize;

/// Query parameters for pagination. Pages are 1-indexed.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl From<PaginationQuery> for PageRequest {
    fn from(query: PaginationQuery) -> Self {
        PageRequest::new(
            query.page.unwrap_or(1),
            query.limit.unwrap_or(PageRequest::DEFAULT_LIMIT),
        )
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: Some(1),
            limit: Some(PageRequest::DEFAULT_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_first_page() {
        let query = PaginationQuery {
            page: None,
            limit: None,
        };
        let page: PageRequest = query.into();
        assert_eq!(page, PageRequest::first());
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let query = PaginationQuery {
            page: Some(0),
            limit: Some(10_000),
        };
        let page: PageRequest = query.into();
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, PageRequest::MAX_LIMIT);
    }
}
