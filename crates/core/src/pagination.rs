//! Page/page-size arithmetic for list endpoints.

use serde::Serialize;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 200;

/// Hard upper bound on a single page.
pub const MAX_PAGE_SIZE: i64 = 200;

/// A resolved, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Build from raw query values, clamping out-of-range input instead of
    /// rejecting it.
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// SQL `LIMIT`.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// SQL `OFFSET`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Whether a page that returned `count` rows may have a successor.
    pub fn has_next(&self, count: usize) -> bool {
        i64::try_from(count).map_or(true, |c| c >= self.page_size)
    }

    pub fn next(&self) -> Self {
        Self {
            page: self.page + 1,
            page_size: self.page_size,
        }
    }

    /// Build the `metadata` block of a list response.
    ///
    /// `path` is the request path without a query string; `self` and `next`
    /// are rendered as path plus `page`/`pageSize` parameters.
    pub fn metadata(&self, path: &str, count: usize) -> ListMetadata {
        ListMetadata {
            object: "metadata",
            count,
            self_link: self.link(path),
            next: self.has_next(count).then(|| self.next().link(path)),
        }
    }

    fn link(&self, path: &str) -> String {
        format!("{path}?page={}&pageSize={}", self.page, self.page_size)
    }
}

/// Pagination block attached to every list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListMetadata {
    pub object: &'static str,
    pub count: usize,
    #[serde(rename = "self")]
    pub self_link: String,
    pub next: Option<String>,
}
