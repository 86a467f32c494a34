/**
 * Current User Handler
 *
 * `GET /api/v1/user/me` returns the signed-in user's profile. The password
 * hash is never part of the response.
 */

use axum::{extract::State, Json};

use crate::backend::auth::handlers::types::ProfileResponse;
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// # Errors
///
/// * `401`/`403` - missing or invalid session
/// * `404 Not Found` - the token's user no longer exists
pub async fn get_me(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state
        .store
        .find_user_by_id(user.id())
        .await
        .map_err(|e| ApiError::internal(format!("failed to load user: {}", e)))?
        .ok_or_else(|| ApiError::not_found("User not found."))?;

    Ok(Json(ProfileResponse { user: user.into() }))
}
