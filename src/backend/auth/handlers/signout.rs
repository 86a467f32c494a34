/**
 * Sign-out Handler
 *
 * `POST /api/v1/user/signout` expires the `token` cookie. Tokens are not
 * tracked server-side, so there is nothing else to revoke.
 */

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::backend::auth::handlers::types::{set_cookie_header, MessageResponse};
use crate::backend::auth::sessions::clear_session_cookie;
use crate::backend::error::ApiError;

pub async fn signout() -> Result<impl IntoResponse, ApiError> {
    Ok((
        StatusCode::OK,
        set_cookie_header(&clear_session_cookie())?,
        Json(MessageResponse::new("user logged out successfully.")),
    ))
}
