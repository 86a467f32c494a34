/**
 * API Error Types
 *
 * This module defines the errors a request handler can answer with. Each
 * variant maps to one HTTP status code and a client-safe message.
 *
 * # Error Categories
 *
 * - `Unauthenticated` - no session token was sent (401)
 * - `InvalidToken` - the session token failed verification (403, cookie cleared)
 * - `Forbidden` - the caller does not own the resource (403)
 * - `BadRequest` / `SharedError` - the payload or credentials were rejected (400)
 * - `NotFound` - the post or comment does not exist (404)
 * - `Conflict` - a unique constraint was hit (409)
 * - `Internal` - anything else (500); the detail is logged, never returned
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;
use crate::shared::SharedError;

/// Message returned for every internal failure
pub const INTERNAL_MESSAGE: &str = "Internal server error.";

/// Errors returned from HTTP handlers
///
/// # Usage
///
/// ```rust
/// use inkpost::backend::error::ApiError;
/// use axum::http::StatusCode;
///
/// let err = ApiError::not_found("Post not found.");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// No credentials were presented
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// A session token was presented but is invalid or expired
    #[error("Invalid or expired session token")]
    InvalidToken,

    /// The caller is authenticated but may not act on the resource
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The request was understood but rejected
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The addressed resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request collides with existing data
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unexpected failure; the string is for logs only
    #[error("Internal error: {0}")]
    Internal(String),

    /// Payload validation failure
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl ApiError {
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Log `detail` and produce a generic 500
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        let detail = detail.to_string();
        tracing::error!("Internal error: {}", detail);
        Self::Internal(detail)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::InvalidToken | Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) | Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message shown to clients
    pub fn message(&self) -> String {
        match self {
            Self::Unauthenticated(message)
            | Self::Forbidden(message)
            | Self::BadRequest(message)
            | Self::NotFound(message)
            | Self::Conflict(message) => message.clone(),
            Self::InvalidToken => "Invalid or expired token.".to_string(),
            Self::Internal(_) => INTERNAL_MESSAGE.to_string(),
            Self::SharedError(err) => err.reason().to_string(),
        }
    }

    /// Whether the response must also clear the session cookie
    pub fn clears_session(&self) -> bool {
        matches!(self, Self::InvalidToken)
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::MissingSecret => Self::internal("JWT secret is not configured"),
            TokenError::Invalid(_) | TokenError::BadSubject => Self::InvalidToken,
            TokenError::Signing(e) => Self::internal(format!("failed to sign token: {}", e)),
        }
    }
}
