//! Pagination types for admin list endpoints
//!
//! All admin list endpoints take the same query parameters (keyword search,
//! page cursor, creation-time window) and answer with the same page envelope.

use serde::{Deserialize, Serialize};

/// Query parameters for admin list endpoints.
///
/// Use the builder pattern to configure options.
///
/// # Example
/// ```ignore
/// let query = ListQuery::new()
///     .keyword("alice")
///     .current(2)
///     .size(20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Fuzzy keyword filter
    pub keyword: Option<String>,
    /// Page number (1-indexed)
    pub current: Option<u64>,
    /// Page size
    pub size: Option<u64>,
    /// Creation-time window start (yyyy-MM-dd)
    pub start_time: Option<String>,
    /// Creation-time window end (yyyy-MM-dd)
    pub end_time: Option<String>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keyword filter. Empty keywords are not sent.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        if !keyword.is_empty() {
            self.keyword = Some(keyword);
        }
        self
    }

    /// Set the page number (1-indexed).
    pub fn current(mut self, current: u64) -> Self {
        self.current = Some(current);
        self
    }

    /// Set the page size.
    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the creation-time window start (yyyy-MM-dd).
    pub fn start_time(mut self, start: impl Into<String>) -> Self {
        self.start_time = Some(start.into());
        self
    }

    /// Set the creation-time window end (yyyy-MM-dd).
    pub fn end_time(mut self, end: impl Into<String>) -> Self {
        self.end_time = Some(end.into());
        self
    }

    /// Convert to query pairs using the backend parameter names.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(ref keyword) = self.keyword {
            params.push(("keyword", keyword.clone()));
        }
        if let Some(current) = self.current {
            params.push(("current", current.to_string()));
        }
        if let Some(size) = self.size {
            params.push(("size", size.to_string()));
        }
        if let Some(ref start) = self.start_time {
            params.push(("startTime", start.clone()));
        }
        if let Some(ref end) = self.end_time {
            params.push(("endTime", end.clone()));
        }

        params
    }

    /// Check if any parameter is set.
    pub fn is_empty(&self) -> bool {
        self.keyword.is_none()
            && self.current.is_none()
            && self.size.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
    }
}

/// Page envelope returned by all admin list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,

    /// Total item count across all pages
    pub total: u64,

    /// Page size
    pub size: u64,

    /// Current page number (1-indexed)
    pub current: u64,

    /// Total page count
    pub pages: u64,
}

impl<T> Page<T> {
    /// Whether pages remain after this one.
    pub fn has_next_page(&self) -> bool {
        self.current < self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_default_is_empty() {
        let query = ListQuery::new();
        assert!(query.is_empty());
        assert!(query.to_query_params().is_empty());
    }

    #[test]
    fn test_list_query_builder() {
        let query = ListQuery::new()
            .keyword("alice")
            .current(2)
            .size(20)
            .start_time("2026-01-01")
            .end_time("2026-02-01");

        assert!(!query.is_empty());
        let params = query.to_query_params();
        assert_eq!(params.len(), 5);
        assert!(params.contains(&("keyword", "alice".to_string())));
        assert!(params.contains(&("current", "2".to_string())));
        assert!(params.contains(&("startTime", "2026-01-01".to_string())));
    }

    #[test]
    fn test_list_query_skips_empty_keyword() {
        let query = ListQuery::new().keyword("");
        assert!(query.is_empty());
    }

    #[test]
    fn test_page_deserializes_wire_shape() {
        let json = r#"{"records":[{"id":1}],"total":41,"size":10,"current":1,"pages":5}"#;
        let page: Page<serde_json::Value> = serde_json::from_str(json).unwrap();

        assert_eq!(page.records.len(), 1);
        assert_eq!(page.total, 41);
        assert!(page.has_next_page());
    }

    #[test]
    fn test_page_last_page_has_no_next() {
        let page: Page<u64> = Page {
            records: vec![1, 2],
            total: 12,
            size: 10,
            current: 2,
            pages: 2,
        };
        assert!(!page.has_next_page());
    }
}
