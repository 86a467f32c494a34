//! Persistence Module
//!
//! The `BlogStore` trait is the only way handlers reach stored data. Two
//! implementations exist:
//!
//! - **`postgres`** - `PgStore`, sqlx queries against PostgreSQL
//! - **`memory`** - `MemoryStore`, process-local tables used when no
//!   `DATABASE_URL` is configured and by the test-suite
//!
//! Failures are reported as `StoreError`, a tagged enum whose variants the
//! handlers map to HTTP statuses explicitly.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::posts::pagination::Pagination;
use crate::shared::{Comment, CommentInput, CommentView, Post, PostDetail, PostInput, PostSummary};

/// PostgreSQL implementation
pub mod postgres;

/// In-memory implementation
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Shared handle to whichever store the server runs with
pub type DynStore = Arc<dyn BlogStore>;

/// Persistence failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A unique constraint was violated; names the conflicting field
    #[error("{0} already exists")]
    Conflict(&'static str),

    /// The addressed record (or a record it references) does not exist
    #[error("record not found")]
    NotFound,

    /// Any other failure
    #[error("store failure: {0}")]
    Other(String),
}

/// Which posts a listing covers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    /// Case-insensitive substring matched against title, content and description
    pub search: Option<String>,
    /// Only posts written by this user
    pub author_id: Option<Uuid>,
}

impl PostFilter {
    /// Filter for the public listing; a blank term means no filtering
    pub fn search(term: Option<&str>) -> Self {
        Self {
            search: term.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string),
            author_id: None,
        }
    }

    /// Filter for one author's posts
    pub fn by_author(author_id: Uuid) -> Self {
        Self {
            search: None,
            author_id: Some(author_id),
        }
    }
}

/// Data access used by the request handlers
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Insert a user; `Conflict("username")` when the name is taken
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, StoreError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Insert a post; `NotFound` when the author does not exist
    async fn create_post(&self, author_id: Uuid, input: &PostInput) -> Result<Post, StoreError>;

    /// One page of posts, newest first, plus the total number of matches
    async fn list_posts(
        &self,
        filter: &PostFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<PostSummary>, u64), StoreError>;

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Post with author and comments (newest first)
    async fn post_detail(&self, id: Uuid) -> Result<Option<PostDetail>, StoreError>;

    /// Replace a post's fields; an absent image keeps the stored one.
    /// `NotFound` unless a post with this id and author exists.
    async fn update_post(&self, id: Uuid, author_id: Uuid, input: &PostInput) -> Result<Post, StoreError>;

    /// Delete a post and its comments; `NotFound` unless id and author match
    async fn delete_post(&self, id: Uuid, author_id: Uuid) -> Result<Post, StoreError>;

    /// Insert a comment; `NotFound` when the post or user does not exist
    async fn create_comment(&self, user_id: Uuid, input: &CommentInput) -> Result<CommentView, StoreError>;

    async fn find_comment(&self, id: Uuid) -> Result<Option<Comment>, StoreError>;

    /// Delete a comment; `NotFound` unless id and author match
    async fn delete_comment(&self, id: Uuid, user_id: Uuid) -> Result<Comment, StoreError>;
}
