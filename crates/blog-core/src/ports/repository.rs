use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Post, PostPatch};
use crate::error::RepoError;

/// How many posts `find_recent` returns when the caller does not say.
pub const DEFAULT_RECENT_LIMIT: u64 = 5;

/// Default and maximum page sizes for `find_page`.
const DEFAULT_PAGE_LIMIT: u64 = 10;
const MAX_PAGE_LIMIT: u64 = 100;

/// A sanitized pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Build a request from raw client input.
    ///
    /// Absent or non-numeric values fall back to page 1 / limit 10; the
    /// limit is capped server-side so a client cannot ask for the whole
    /// table in one page.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.parse::<u64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);
        let limit = limit
            .and_then(|l| l.parse::<u64>().ok())
            .filter(|l| *l >= 1)
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .min(MAX_PAGE_LIMIT);
        Self { page, limit }
    }
}

/// Pagination metadata returned alongside a page of posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

/// Post repository - persistence operations against the relational store.
///
/// All listing operations order by `date` descending with `id` as the tie
/// breaker, so results are deterministic. A missing row is reported as a
/// not-found signal (`None` / `false`), never as a `RepoError`.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist an already-validated post.
    async fn create(&self, post: Post) -> Result<Post, RepoError>;

    /// All posts, newest first. An empty vec is a successful outcome.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// One page of posts plus pagination metadata
    /// (`total_pages = ceil(total / limit)`).
    async fn find_page(&self, req: PageRequest) -> Result<(Vec<Post>, PageMeta), RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Apply a validated patch to an existing post; `None` when the id does
    /// not resolve to a row.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, RepoError>;

    /// Hard delete. `false` when the id does not resolve to a row.
    async fn delete(&self, id: Uuid) -> Result<bool, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;

    /// The `limit` most recent posts by `date` descending.
    async fn find_recent(&self, limit: u64) -> Result<Vec<Post>, RepoError>;

    /// Case-insensitive substring match over title, category and the text
    /// rendering of date. The query is checked for presence by the caller
    /// before any storage access.
    async fn search(&self, query: &str) -> Result<Vec<Post>, RepoError>;
}
