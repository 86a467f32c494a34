/**
 * Sign-in Handler
 *
 * `POST /api/v1/user/signin`
 *
 * 1. Validate the credentials payload
 * 2. Look up the user and check the password with bcrypt
 * 3. Issue a 24h token and set it as the `token` cookie
 *
 * An unknown username and a wrong password produce the same 400 response
 * after the same amount of bcrypt work, so the endpoint does not reveal
 * which usernames exist.
 */

use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::backend::auth::handlers::types::{set_cookie_header, MessageResponse};
use crate::backend::auth::sessions::session_cookie;
use crate::backend::auth::users::{burn_password_check, verify_password};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::{parse, CredentialsPayload};

/// Message for any credential mismatch
pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";

/// Sign-in handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed payload, unknown user or wrong password
/// * `500 Internal Server Error` - store failure or no signing secret
pub async fn signin(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let credentials = parse::<CredentialsPayload>(&body)?;
    tracing::info!("Sign-in request for: {}", credentials.username);

    let user = state
        .store
        .find_user_by_username(&credentials.username)
        .await
        .map_err(|e| ApiError::internal(format!("failed to look up user: {}", e)))?;

    let Some(user) = user else {
        tracing::warn!("User not found: {}", credentials.username);
        burn_password_check(credentials.password, state.config.bcrypt_cost).await?;
        return Err(ApiError::bad_request(INVALID_CREDENTIALS));
    };

    if !verify_password(credentials.password, user.password_hash.clone()).await? {
        tracing::warn!("Invalid password for user: {}", user.username);
        return Err(ApiError::bad_request(INVALID_CREDENTIALS));
    }

    let token = state.tokens.issue(user.id)?;
    let cookie = session_cookie(token, state.config.production);

    tracing::info!("User signed in successfully: {} ({})", user.username, user.id);

    Ok((
        StatusCode::OK,
        set_cookie_header(&cookie)?,
        Json(MessageResponse::new("user login successful.")),
    ))
}
