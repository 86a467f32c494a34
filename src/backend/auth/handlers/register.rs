/**
 * Registration Handler
 *
 * `POST /api/v1/user/register`
 *
 * 1. Validate the credentials payload
 * 2. Hash the password with bcrypt
 * 3. Insert the user; a taken username is a 409
 */

use axum::{body::Bytes, extract::State, http::StatusCode, Json};

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::auth::users::hash_password;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;
use crate::shared::{parse, CredentialsPayload};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - payload is not valid credentials
/// * `409 Conflict` - username already taken
/// * `500 Internal Server Error` - hashing or store failure
///
/// # Example Request
///
/// ```http
/// POST /api/v1/user/register HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "alice", "password": "securepassword123" }
/// ```
pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let credentials = parse::<CredentialsPayload>(&body).map_err(|e| {
        tracing::warn!("Rejected registration payload: {}", e);
        e
    })?;
    tracing::info!("Registration request for username: {}", credentials.username);

    let password_hash = hash_password(credentials.password, state.config.bcrypt_cost).await?;

    match state.store.create_user(&credentials.username, &password_hash).await {
        Ok(user) => {
            tracing::info!("User created successfully: {} ({})", user.username, user.id);
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse::new("user created successfully.")),
            ))
        }
        Err(StoreError::Conflict(_)) => {
            tracing::warn!("Username already exists: {}", credentials.username);
            Err(ApiError::conflict("username already exist."))
        }
        Err(e) => Err(ApiError::internal(format!("failed to create user: {}", e))),
    }
}
