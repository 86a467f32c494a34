//! Page/limit handling for post listings.
//!
//! Query values arrive as free text. Anything that is not a positive integer
//! falls back to the default, and the limit is capped.

use serde::{Deserialize, Serialize};

use crate::shared::PostSummary;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 9;
pub const MAX_LIMIT: u32 = 100;

/// Query string accepted by the listing endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// A resolved page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn positive(value: Option<&str>) -> Option<u32> {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
}

impl Pagination {
    /// Build from numeric values; zero falls back to the defaults
    pub fn new(page: u32, limit: u32) -> Self {
        let page = if page == 0 { DEFAULT_PAGE } else { page };
        let limit = if limit == 0 { DEFAULT_LIMIT } else { limit.min(MAX_LIMIT) };
        Self { page, limit }
    }

    /// Build from raw query-string values
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            positive(page).unwrap_or(DEFAULT_PAGE),
            positive(limit).unwrap_or(DEFAULT_LIMIT),
        )
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of rows to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// `ceil(total / limit)`
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.limit))
    }
}

impl From<&ListQuery> for Pagination {
    fn from(query: &ListQuery) -> Self {
        Self::from_query(query.page.as_deref(), query.limit.as_deref())
    }
}

/// Body of a listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    pub posts: Vec<PostSummary>,
    pub total_posts: u64,
    pub total_pages: u64,
    pub current_page: u32,
}

impl PostPage {
    pub fn new(posts: Vec<PostSummary>, total_posts: u64, pagination: &Pagination) -> Self {
        Self {
            posts,
            total_posts,
            total_pages: pagination.total_pages(total_posts),
            current_page: pagination.page(),
        }
    }
}
