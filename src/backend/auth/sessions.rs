/**
 * Session Tokens and Cookies
 *
 * This module issues and verifies the HS256 JWTs that identify a signed-in
 * user, and builds the `token` cookie that carries them.
 *
 * The signing secret is handed to `TokenService` at construction. A service
 * built without a secret still exists so the server can start, but every
 * sign/verify call fails with `TokenError::MissingSecret`.
 */

use std::sync::Arc;

use chrono::{Duration, Utc};
use cookie::{Cookie, SameSite};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "token";

/// Session lifetime, for both the JWT `exp` claim and the cookie `Max-Age`
pub const SESSION_TTL_HOURS: i64 = 24;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Token failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// The server was started without `JWT_SECRET`
    #[error("JWT secret is not configured")]
    MissingSecret,

    /// Bad signature, malformed token or expired `exp`
    #[error("token rejected: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    /// The `sub` claim is not a user id
    #[error("token subject is not a user id")]
    BadSubject,

    /// Encoding failed
    #[error("token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Issues and verifies session tokens with an injected secret
#[derive(Clone)]
pub struct TokenService {
    keys: Option<Arc<Keys>>,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("configured", &self.keys.is_some())
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenService {
    /// Create a token service; `None` leaves it unconfigured
    pub fn new(secret: Option<&str>) -> Self {
        let keys = secret.filter(|s| !s.is_empty()).map(|secret| {
            Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            })
        });

        Self {
            keys,
            ttl: Duration::hours(SESSION_TTL_HOURS),
        }
    }

    /// Whether a signing secret is available
    pub fn is_configured(&self) -> bool {
        self.keys.is_some()
    }

    fn keys(&self) -> Result<&Keys, TokenError> {
        self.keys.as_deref().ok_or(TokenError::MissingSecret)
    }

    /// Create a token for `user_id` valid for the session lifetime
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        self.issue_with_times(user_id, now, now + self.ttl.num_seconds())
    }

    /// Create a token with explicit `iat`/`exp` timestamps
    pub fn issue_with_times(&self, user_id: Uuid, iat: i64, exp: i64) -> Result<String, TokenError> {
        let keys = self.keys()?;
        let claims = Claims {
            sub: user_id.to_string(),
            exp,
            iat,
        };

        encode(&Header::default(), &claims, &keys.encoding).map_err(TokenError::Signing)
    }

    /// Verify a token and return the user id it was issued for
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let keys = self.keys()?;
        // `exp` is a hard cutoff
        let mut validation = Validation::default();
        validation.leeway = 0;

        let data = decode::<Claims>(token, &keys.decoding, &validation).map_err(TokenError::Invalid)?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::BadSubject)
    }
}

/// Build the cookie that carries a freshly issued token
///
/// Production deployments serve the frontend from another origin, so the
/// cookie has to be `Secure; SameSite=None` there.
pub fn session_cookie(token: String, production: bool) -> Cookie<'static> {
    let same_site = if production { SameSite::None } else { SameSite::Lax };

    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .max_age(cookie::time::Duration::hours(SESSION_TTL_HOURS))
        .http_only(true)
        .secure(production)
        .same_site(same_site)
        .build()
}

/// Build a cookie that removes the session cookie on the client
pub fn clear_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    cookie.make_removal();
    cookie
}

/// Find the session token in a `Cookie` request header value
pub fn token_from_cookie_header(header: &str) -> Option<String> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}
