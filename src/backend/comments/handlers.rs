/**
 * Comment Handlers
 *
 * - `POST /api/v1/post/comment` adds a comment to an existing post
 * - `DELETE /api/v1/post/comment/{commentId}` removes the caller's comment
 */

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;
use crate::shared::{parse, Comment, CommentPayload, CommentView};

const INVALID_POST: &str = "Invalid post details.";
const COMMENT_NOT_FOUND: &str = "Comment doesn't exist.";

/// Body of a created comment
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: CommentView,
}

/// Body of a deleted comment
#[derive(Debug, Serialize)]
pub struct DeletedComment {
    pub comment: Comment,
    pub message: String,
}

/// Create comment handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid payload or the post does not exist
/// * `401`/`403` - missing or invalid session
pub async fn create_comment(
    State(state): State<AppState>,
    user: AuthUser,
    body: Bytes,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let input = parse::<CommentPayload>(&body)?;

    let post = state
        .store
        .find_post(input.post_id)
        .await
        .map_err(|e| ApiError::internal(format!("failed to load post {}: {}", input.post_id, e)))?;
    if post.is_none() {
        tracing::warn!("Comment on unknown post {}", input.post_id);
        return Err(ApiError::bad_request(INVALID_POST));
    }

    let comment = state
        .store
        .create_comment(user.id(), &input)
        .await
        .map_err(|e| match e {
            // post deleted between lookup and insert
            StoreError::NotFound => ApiError::bad_request(INVALID_POST),
            other => ApiError::internal(format!("failed to create comment: {}", other)),
        })?;

    tracing::info!("Comment {} added to post {} by {}", comment.comment.id, input.post_id, user.id());
    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

/// Delete comment handler
///
/// # Errors
///
/// * `404 Not Found` - no such comment
/// * `403 Forbidden` - the comment belongs to someone else
pub async fn delete_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(raw_id): Path<String>,
) -> Result<Json<DeletedComment>, ApiError> {
    let id = Uuid::parse_str(&raw_id).map_err(|_| ApiError::not_found(COMMENT_NOT_FOUND))?;

    let existing = state
        .store
        .find_comment(id)
        .await
        .map_err(|e| ApiError::internal(format!("failed to load comment {}: {}", id, e)))?
        .ok_or_else(|| ApiError::not_found(COMMENT_NOT_FOUND))?;

    if existing.user_id != user.id() {
        tracing::warn!("User {} tried to delete comment {} of {}", user.id(), id, existing.user_id);
        return Err(ApiError::forbidden("You can't delete another user's comments."));
    }

    let comment = state
        .store
        .delete_comment(id, user.id())
        .await
        .map_err(|e| match e {
            StoreError::NotFound => ApiError::not_found(COMMENT_NOT_FOUND),
            other => ApiError::internal(format!("failed to delete comment {}: {}", id, other)),
        })?;

    tracing::info!("Comment {} deleted by {}", id, user.id());
    Ok(Json(DeletedComment {
        comment,
        message: "comment deleted successfully.".to_string(),
    }))
}
