/**
 * Authentication Handler Types
 *
 * Response bodies shared by the user endpoints. Request bodies are the
 * schemas in `shared::validation`.
 */

use axum::http::{header::SET_COOKIE, HeaderValue};
use cookie::Cookie;
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::UserProfile;
use crate::backend::error::ApiError;

/// A body carrying only a status message
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `GET /me`
#[derive(Serialize, Debug)]
pub struct ProfileResponse {
    pub user: UserProfile,
}

/// A `Set-Cookie` header pair ready to be returned from a handler
pub fn set_cookie_header(cookie: &Cookie<'_>) -> Result<[(axum::http::HeaderName, HeaderValue); 1], ApiError> {
    let value = HeaderValue::from_str(&cookie.to_string()).map_err(ApiError::internal)?;
    Ok([(SET_COOKIE, value)])
}
