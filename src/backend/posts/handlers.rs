/**
 * Post Handlers
 *
 * Public reads (listing and detail) and the author-only writes. Writes on an
 * existing post look the post up first and compare its author with the
 * caller before the body is parsed, so a non-author always gets 403.
 */

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::backend::auth::handlers::MessageResponse;
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::posts::pagination::{ListQuery, Pagination, PostPage};
use crate::backend::server::state::AppState;
use crate::backend::store::{PostFilter, StoreError};
use crate::shared::{parse, Post, PostDetail, PostPayload};

/// Body wrapping a single post
#[derive(Debug, Serialize)]
pub struct PostResponse<T> {
    pub post: T,
}

const POST_NOT_FOUND: &str = "Post not found.";

/// Path ids are taken as text so a malformed id reads as a missing post
fn post_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found(POST_NOT_FOUND))
}

/// Load a post and make sure `user` wrote it
async fn owned_post(state: &AppState, raw_id: &str, user: AuthUser, action: &str) -> Result<Post, ApiError> {
    let id = post_id(raw_id)?;
    let post = state
        .store
        .find_post(id)
        .await
        .map_err(|e| ApiError::internal(format!("failed to load post {}: {}", id, e)))?
        .ok_or_else(|| ApiError::not_found(POST_NOT_FOUND))?;

    if post.author_id != user.id() {
        tracing::warn!("User {} tried to {} post {} owned by {}", user.id(), action, id, post.author_id);
        return Err(ApiError::forbidden(format!("You can't {} another user's posts.", action)));
    }

    Ok(post)
}

fn write_error(err: StoreError, id: Uuid) -> ApiError {
    match err {
        StoreError::NotFound => ApiError::not_found(POST_NOT_FOUND),
        other => ApiError::internal(format!("failed to write post {}: {}", id, other)),
    }
}

/// `POST /api/v1/post/`
pub async fn create_post(
    State(state): State<AppState>,
    user: AuthUser,
    body: Bytes,
) -> Result<(StatusCode, Json<PostResponse<Post>>), ApiError> {
    let input = parse::<PostPayload>(&body)?;

    let post = state
        .store
        .create_post(user.id(), &input)
        .await
        .map_err(|e| match e {
            // the token outlived its user
            StoreError::NotFound => ApiError::unauthenticated("Please login."),
            other => ApiError::internal(format!("failed to create post: {}", other)),
        })?;

    tracing::info!("Post {} created by {}", post.id, user.id());
    Ok((StatusCode::CREATED, Json(PostResponse { post })))
}

/// `GET /api/v1/post/?search=&page=&limit=`
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<PostPage>, ApiError> {
    let pagination = Pagination::from(&query);
    let filter = PostFilter::search(query.search.as_deref());

    let (posts, total) = state
        .store
        .list_posts(&filter, &pagination)
        .await
        .map_err(|e| ApiError::internal(format!("failed to list posts: {}", e)))?;

    Ok(Json(PostPage::new(posts, total, &pagination)))
}

/// `GET /api/v1/post/user/posts?page=&limit=`
pub async fn list_my_posts(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<PostPage>, ApiError> {
    let pagination = Pagination::from(&query);
    let filter = PostFilter::by_author(user.id());

    let (posts, total) = state
        .store
        .list_posts(&filter, &pagination)
        .await
        .map_err(|e| ApiError::internal(format!("failed to list posts of {}: {}", user.id(), e)))?;

    Ok(Json(PostPage::new(posts, total, &pagination)))
}

/// `GET /api/v1/post/{postId}`
pub async fn get_post(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<PostResponse<PostDetail>>, ApiError> {
    let id = post_id(&raw_id)?;

    let post = state
        .store
        .post_detail(id)
        .await
        .map_err(|e| ApiError::internal(format!("failed to load post {}: {}", id, e)))?
        .ok_or_else(|| ApiError::not_found(POST_NOT_FOUND))?;

    Ok(Json(PostResponse { post }))
}

/// `PUT /api/v1/post/{postId}`
///
/// A missing `imageUrl` keeps the stored image.
pub async fn update_post(
    State(state): State<AppState>,
    user: AuthUser,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let post = owned_post(&state, &raw_id, user, "edit").await?;
    let input = parse::<PostPayload>(&body)?;

    state
        .store
        .update_post(post.id, user.id(), &input)
        .await
        .map_err(|e| write_error(e, post.id))?;

    tracing::info!("Post {} updated by {}", post.id, user.id());
    Ok(Json(MessageResponse::new("post updated successfully")))
}

/// `DELETE /api/v1/post/{postId}`
///
/// Comments on the post are removed with it.
pub async fn delete_post(
    State(state): State<AppState>,
    user: AuthUser,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let post = owned_post(&state, &raw_id, user, "delete").await?;

    state
        .store
        .delete_post(post.id, user.id())
        .await
        .map_err(|e| write_error(e, post.id))?;

    tracing::info!("Post {} deleted by {}", post.id, user.id());
    Ok(Json(MessageResponse::new("Post deleted successfully.")))
}
