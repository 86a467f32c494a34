/**
 * In-Memory Store
 *
 * A `BlogStore` kept in process memory. The server falls back to it when no
 * `DATABASE_URL` is configured, and the test-suite runs against it.
 *
 * Rows are kept in insertion order, so iterating in reverse yields newest
 * first. The same constraints as the SQL schema are enforced: unique
 * usernames, author/post references must exist, and deleting a post deletes
 * its comments.
 */

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::posts::pagination::Pagination;
use crate::backend::store::{BlogStore, PostFilter, StoreError};
use crate::shared::{
    Author, Comment, CommentInput, CommentView, Post, PostDetail, PostInput, PostSummary,
};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl Tables {
    fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn author(&self, id: Uuid) -> Author {
        // Foreign keys guarantee the user exists.
        Author::new(self.user(id).map(|u| u.username.clone()).unwrap_or_default())
    }

    fn summary(&self, post: &Post) -> PostSummary {
        PostSummary {
            post: post.clone(),
            author: self.author(post.author_id),
        }
    }

    fn comment_view(&self, comment: &Comment) -> CommentView {
        CommentView {
            comment: comment.clone(),
            user: self.author(comment.user_id),
        }
    }
}

/// Case-insensitive substring match over title, content and description
pub fn matches_search(post: &Post, term: &str) -> bool {
    let needle = term.to_lowercase();
    [&post.title, &post.content, &post.description]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

fn matches_filter(post: &Post, filter: &PostFilter) -> bool {
    let by_author = filter.author_id.map_or(true, |id| post.author_id == id);
    let by_search = filter
        .search
        .as_deref()
        .map_or(true, |term| matches_search(post, term));
    by_author && by_search
}

/// Process-local `BlogStore`
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.username == username) {
            return Err(StoreError::Conflict("username"));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.tables.read().await.user(id).cloned())
    }

    async fn create_post(&self, author_id: Uuid, input: &PostInput) -> Result<Post, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.user(author_id).is_none() {
            return Err(StoreError::NotFound);
        }

        let post = Post {
            id: Uuid::new_v4(),
            title: input.title.clone(),
            content: input.content.clone(),
            description: input.description.clone(),
            image_url: input.image_url.clone(),
            author_id,
            created_at: Utc::now(),
        };
        tables.posts.push(post.clone());
        Ok(post)
    }

    async fn list_posts(
        &self,
        filter: &PostFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<PostSummary>, u64), StoreError> {
        let tables = self.tables.read().await;
        let matching: Vec<&Post> = tables
            .posts
            .iter()
            .rev()
            .filter(|post| matches_filter(post, filter))
            .collect();

        let total = matching.len() as u64;
        let skip = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        let page = matching
            .into_iter()
            .skip(skip)
            .take(pagination.limit() as usize)
            .map(|post| tables.summary(post))
            .collect();

        Ok((page, total))
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn post_detail(&self, id: Uuid) -> Result<Option<PostDetail>, StoreError> {
        let tables = self.tables.read().await;
        let Some(post) = tables.posts.iter().find(|p| p.id == id) else {
            return Ok(None);
        };

        let comments = tables
            .comments
            .iter()
            .rev()
            .filter(|c| c.post_id == id)
            .map(|c| tables.comment_view(c))
            .collect();

        Ok(Some(PostDetail {
            post: post.clone(),
            author: tables.author(post.author_id),
            comments,
        }))
    }

    async fn update_post(&self, id: Uuid, author_id: Uuid, input: &PostInput) -> Result<Post, StoreError> {
        let mut tables = self.tables.write().await;
        let post = tables
            .posts
            .iter_mut()
            .find(|p| p.id == id && p.author_id == author_id)
            .ok_or(StoreError::NotFound)?;

        post.title = input.title.clone();
        post.content = input.content.clone();
        post.description = input.description.clone();
        if let Some(image_url) = &input.image_url {
            post.image_url = Some(image_url.clone());
        }
        Ok(post.clone())
    }

    async fn delete_post(&self, id: Uuid, author_id: Uuid) -> Result<Post, StoreError> {
        let mut tables = self.tables.write().await;
        let index = tables
            .posts
            .iter()
            .position(|p| p.id == id && p.author_id == author_id)
            .ok_or(StoreError::NotFound)?;

        let post = tables.posts.remove(index);
        tables.comments.retain(|c| c.post_id != id);
        Ok(post)
    }

    async fn create_comment(&self, user_id: Uuid, input: &CommentInput) -> Result<CommentView, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.user(user_id).is_none() || !tables.posts.iter().any(|p| p.id == input.post_id) {
            return Err(StoreError::NotFound);
        }

        let comment = Comment {
            id: Uuid::new_v4(),
            comment: input.comment.clone(),
            user_id,
            post_id: input.post_id,
            created_at: Utc::now(),
        };
        tables.comments.push(comment.clone());
        Ok(tables.comment_view(&comment))
    }

    async fn find_comment(&self, id: Uuid) -> Result<Option<Comment>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.comments.iter().find(|c| c.id == id).cloned())
    }

    async fn delete_comment(&self, id: Uuid, user_id: Uuid) -> Result<Comment, StoreError> {
        let mut tables = self.tables.write().await;
        let index = tables
            .comments
            .iter()
            .position(|c| c.id == id && c.user_id == user_id)
            .ok_or(StoreError::NotFound)?;

        Ok(tables.comments.remove(index))
    }
}
