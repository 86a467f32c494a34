/**
 * PostgreSQL Store
 *
 * `BlogStore` backed by a sqlx `PgPool`. The schema lives in `migrations/`.
 *
 * # Error Mapping
 *
 * - unique violation → `StoreError::Conflict`
 * - foreign key violation or `RowNotFound` → `StoreError::NotFound`
 * - everything else → `StoreError::Other`
 *
 * # Search
 *
 * The search term is matched with `ILIKE`. `%`, `_` and `\` in the term are
 * escaped so they match literally.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::posts::pagination::Pagination;
use crate::backend::store::{BlogStore, PostFilter, StoreError};
use crate::shared::{
    Author, Comment, CommentInput, CommentView, Post, PostDetail, PostInput, PostSummary,
};

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                match db.constraint() {
                    Some("users_username_key") => StoreError::Conflict("username"),
                    _ => StoreError::Conflict("record"),
                }
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => StoreError::NotFound,
            _ => StoreError::Other(err.to_string()),
        }
    }
}

/// Escape LIKE wildcards and wrap the term for a substring match
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: String,
    description: String,
    image_url: Option<String>,
    author_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            title: row.title,
            content: row.content,
            description: row.description,
            image_url: row.image_url,
            author_id: row.author_id,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostWithAuthorRow {
    #[sqlx(flatten)]
    post: PostRow,
    author_username: String,
}

impl From<PostWithAuthorRow> for PostSummary {
    fn from(row: PostWithAuthorRow) -> Self {
        PostSummary {
            post: row.post.into(),
            author: Author::new(row.author_username),
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    comment: String,
    user_id: Uuid,
    post_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            comment: row.comment,
            user_id: row.user_id,
            post_id: row.post_id,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentWithUserRow {
    #[sqlx(flatten)]
    comment: CommentRow,
    username: String,
}

impl From<CommentWithUserRow> for CommentView {
    fn from(row: CommentWithUserRow) -> Self {
        CommentView {
            comment: row.comment.into(),
            user: Author::new(row.username),
        }
    }
}

const POST_COLUMNS: &str = "id, title, content, description, image_url, author_id, created_at";

const POST_FILTER: &str = r#"
    ($1::text IS NULL
        OR p.title ILIKE $1 ESCAPE '\'
        OR p.content ILIKE $1 ESCAPE '\'
        OR p.description ILIKE $1 ESCAPE '\')
    AND ($2::uuid IS NULL OR p.author_id = $2)
"#;

/// `BlogStore` over a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogStore for PgStore {
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, password, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, password, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_post(&self, author_id: Uuid, input: &PostInput) -> Result<Post, StoreError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            INSERT INTO posts (id, title, content, description, image_url, author_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(author_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list_posts(
        &self,
        filter: &PostFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<PostSummary>, u64), StoreError> {
        let pattern = filter.search.as_deref().map(like_pattern);
        let limit = i64::from(pagination.limit());
        let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);

        let rows = sqlx::query_as::<_, PostWithAuthorRow>(&format!(
            r#"
            SELECT p.id, p.title, p.content, p.description, p.image_url, p.author_id,
                   p.created_at, u.username AS author_username
            FROM posts p
            JOIN users u ON u.id = p.author_id
            WHERE {POST_FILTER}
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(&pattern)
        .bind(filter.author_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM posts p WHERE {POST_FILTER}"
        ))
        .bind(&pattern)
        .bind(filter.author_id)
        .fetch_one(&self.pool)
        .await?;

        let posts = rows.into_iter().map(PostSummary::from).collect();
        Ok((posts, u64::try_from(total).unwrap_or(0)))
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Post::from))
    }

    async fn post_detail(&self, id: Uuid) -> Result<Option<PostDetail>, StoreError> {
        let row = sqlx::query_as::<_, PostWithAuthorRow>(
            r#"
            SELECT p.id, p.title, p.content, p.description, p.image_url, p.author_id,
                   p.created_at, u.username AS author_username
            FROM posts p
            JOIN users u ON u.id = p.author_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let comments = sqlx::query_as::<_, CommentWithUserRow>(
            r#"
            SELECT c.id, c.comment, c.user_id, c.post_id, c.created_at, u.username
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.post_id = $1
            ORDER BY c.created_at DESC, c.id DESC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let summary = PostSummary::from(row);
        Ok(Some(PostDetail {
            post: summary.post,
            author: summary.author,
            comments: comments.into_iter().map(CommentView::from).collect(),
        }))
    }

    async fn update_post(&self, id: Uuid, author_id: Uuid, input: &PostInput) -> Result<Post, StoreError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            UPDATE posts
            SET title = $3, content = $4, description = $5,
                image_url = COALESCE($6, image_url)
            WHERE id = $1 AND author_id = $2
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(author_id)
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.description)
        .bind(&input.image_url)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Post::from).ok_or(StoreError::NotFound)
    }

    async fn delete_post(&self, id: Uuid, author_id: Uuid) -> Result<Post, StoreError> {
        // Comments go with the post through ON DELETE CASCADE.
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "DELETE FROM posts WHERE id = $1 AND author_id = $2 RETURNING {POST_COLUMNS}"
        ))
        .bind(id)
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Post::from).ok_or(StoreError::NotFound)
    }

    async fn create_comment(&self, user_id: Uuid, input: &CommentInput) -> Result<CommentView, StoreError> {
        let row = sqlx::query_as::<_, CommentWithUserRow>(
            r#"
            WITH inserted AS (
                INSERT INTO comments (id, comment, user_id, post_id, created_at)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, comment, user_id, post_id, created_at
            )
            SELECT i.id, i.comment, i.user_id, i.post_id, i.created_at, u.username
            FROM inserted i
            JOIN users u ON u.id = i.user_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&input.comment)
        .bind(user_id)
        .bind(input.post_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_comment(&self, id: Uuid) -> Result<Option<Comment>, StoreError> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, comment, user_id, post_id, created_at FROM comments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Comment::from))
    }

    async fn delete_comment(&self, id: Uuid, user_id: Uuid) -> Result<Comment, StoreError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            DELETE FROM comments
            WHERE id = $1 AND user_id = $2
            RETURNING id, comment, user_id, post_id, created_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Comment::from).ok_or(StoreError::NotFound)
    }
}
