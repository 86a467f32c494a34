/**
 * Authentication Extractor
 *
 * Protected handlers take an `AuthUser` parameter. Extracting it reads the
 * `token` cookie, verifies it with the `TokenService` from state, and hands
 * the user id to the handler. The handler body never runs when extraction
 * fails:
 *
 * - no cookie → 401 "Please login."
 * - no signing secret configured → 500
 * - bad or expired token → 403, and the cookie is cleared
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::COOKIE, request::Parts},
};
use uuid::Uuid;

use crate::backend::auth::sessions::{token_from_cookie_header, TokenService};
use crate::backend::error::ApiError;

/// The id of the user a request is authenticated as
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthUser(pub Uuid);

impl AuthUser {
    pub fn id(&self) -> Uuid {
        self.0
    }
}

/// Find the session token among the request's `Cookie` headers
pub fn session_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(token_from_cookie_header)
}

impl<S> FromRequestParts<S> for AuthUser
where
    TokenService: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = session_token(parts).ok_or_else(|| {
            tracing::warn!("Missing session cookie for {}", parts.uri.path());
            ApiError::unauthenticated("Please login.")
        })?;

        let tokens = TokenService::from_ref(state);
        let user_id = tokens.verify(&token).map_err(|e| {
            tracing::warn!("Rejected session token: {}", e);
            ApiError::from(e)
        })?;

        Ok(AuthUser(user_id))
    }
}
