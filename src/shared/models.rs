//! Blog resource types as they appear on the wire.
//!
//! Field names are camelCase in JSON (`imageUrl`, `authorId`, `createdAt`).
//! Listing and detail views embed the author's username next to the post
//! fields rather than nesting the post.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub description: String,
    pub image_url: Option<String>,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Username of the user behind a post or comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub username: String,
}

impl Author {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// A post together with its author, as returned by the listing endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    #[serde(flatten)]
    pub post: Post,
    pub author: Author,
}

/// A stored comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub comment: String,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A comment together with the username of whoever wrote it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    #[serde(flatten)]
    pub comment: Comment,
    pub user: Author,
}

/// Full post view: the post, its author and its comments (newest first)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub author: Author,
    pub comments: Vec<CommentView>,
}
