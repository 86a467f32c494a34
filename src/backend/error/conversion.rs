/**
 * Error Conversion
 *
 * Converts `ApiError` into an HTTP response so handlers can return it
 * directly.
 *
 * # Response Format
 *
 * ```json
 * { "message": "Post not found." }
 * ```
 *
 * An `InvalidToken` response additionally carries a `Set-Cookie` header that
 * expires the session cookie on the client.
 */

use axum::{
    http::{header::SET_COOKIE, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::auth::sessions::clear_session_cookie;
use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "message": self.message() }));
        let mut response = (status, body).into_response();

        if self.clears_session() {
            if let Ok(value) = HeaderValue::from_str(&clear_session_cookie().to_string()) {
                response.headers_mut().append(SET_COOKIE, value);
            }
        }

        response
    }
}
