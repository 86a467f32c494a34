//! Authentication test helpers
//!
//! Sessions travel as a raw `Cookie` header so tests control exactly which
//! token a request carries.

use axum::http::{
    header::{COOKIE, SET_COOKIE},
    HeaderValue,
};
use axum_test::{TestRequest, TestResponse, TestServer};
use inkpost::backend::auth::sessions::TokenService;
use serde_json::json;
use uuid::Uuid;

use super::test_server::TEST_SECRET;

pub const TEST_PASSWORD: &str = "password123";

pub async fn register(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post("/api/v1/user/register")
        .json(&json!({ "username": username, "password": password }))
        .await
}

pub async fn signin(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post("/api/v1/user/signin")
        .json(&json!({ "username": username, "password": password }))
        .await
}

/// The raw `Set-Cookie` header of a response, if any
pub fn set_cookie(response: &TestResponse) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// `name=value` part of a `Set-Cookie` header
pub fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap_or_default().trim().to_string()
}

/// Register and sign in; returns the `token=...` cookie pair
pub async fn signed_in(server: &TestServer, username: &str) -> String {
    let response = register(server, username, TEST_PASSWORD).await;
    assert_eq!(response.status_code(), 201, "register {} failed", username);

    let response = signin(server, username, TEST_PASSWORD).await;
    assert_eq!(response.status_code(), 200, "signin {} failed", username);

    cookie_pair(&set_cookie(&response).expect("signin sets a cookie"))
}

/// Attach a session cookie to a request
pub fn with_session(request: TestRequest, cookie: &str) -> TestRequest {
    request.add_header(COOKIE, HeaderValue::from_str(cookie).expect("valid cookie header"))
}

/// A token signed with the test secret that expired a day ago
pub fn expired_session(user_id: Uuid) -> String {
    let now = chrono::Utc::now().timestamp();
    let token = TokenService::new(Some(TEST_SECRET))
        .issue_with_times(user_id, now - 2 * 86_400, now - 86_400)
        .expect("sign expired token");
    format!("token={}", token)
}

/// A well-formed token signed with the wrong secret
pub fn forged_session(user_id: Uuid) -> String {
    let token = TokenService::new(Some("not-the-server-secret"))
        .issue(user_id)
        .expect("sign forged token");
    format!("token={}", token)
}
