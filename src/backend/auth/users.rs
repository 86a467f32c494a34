/**
 * User Model and Password Hashing
 *
 * This module holds the stored user record and the bcrypt helpers used by
 * registration and sign-in. Hashing runs on tokio's blocking pool so a slow
 * cost factor does not stall request handling.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::backend::error::ApiError;

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique, 3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// Hashed password (bcrypt)
    #[sqlx(rename = "password")]
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// User information that is safe to return to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

/// Hash a password with bcrypt
pub async fn hash_password(password: String, cost: u32) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(ApiError::internal)?
        .map_err(|e| ApiError::internal(format!("failed to hash password: {}", e)))
}

/// Check a password against a stored bcrypt hash
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, ApiError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(ApiError::internal)?
        .map_err(|e| ApiError::internal(format!("failed to verify password: {}", e)))
}

/// Run one bcrypt computation at `cost` and discard it
///
/// Sign-in calls this when the username is unknown so that branch costs as
/// much as checking a real hash.
pub async fn burn_password_check(password: String, cost: u32) -> Result<(), ApiError> {
    hash_password(password, cost).await.map(|_| ())
}
