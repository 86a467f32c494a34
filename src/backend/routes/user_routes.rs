/**
 * User Routes
 *
 * - `POST /api/v1/user/register` - Create an account
 * - `POST /api/v1/user/signin`   - Sign in and receive the session cookie
 * - `POST /api/v1/user/signout`  - Clear the session cookie
 * - `GET  /api/v1/user/me`       - Current user (requires session)
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, register, signin, signout};
use crate::backend::server::state::AppState;

pub const USER_PREFIX: &str = "/api/v1/user";

/// Add the user routes to `router`
pub fn configure_user_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(&format!("{USER_PREFIX}/register"), post(register))
        .route(&format!("{USER_PREFIX}/signin"), post(signin))
        .route(&format!("{USER_PREFIX}/signout"), post(signout))
        .route(&format!("{USER_PREFIX}/me"), get(get_me))
}
