//! Authentication API integration tests
//!
//! Register, sign in, sign out, current user and the session extractor.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::*;

#[tokio::test]
async fn test_register_success() {
    let server = test_server();

    let response = register(&server, "alice", TEST_PASSWORD).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "user created successfully." })
    );
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let server = test_server();
    register(&server, "alice", TEST_PASSWORD).await;

    let response = register(&server, "alice", "another-password").await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["message"], "username already exist.");
}

#[tokio::test]
async fn test_register_rejects_invalid_payloads() {
    let server = test_server();

    let cases = [
        (json!({ "password": TEST_PASSWORD }), "Username is required."),
        (
            json!({ "username": "al", "password": TEST_PASSWORD }),
            "Username must be between 3 and 30 characters long.",
        ),
        (
            json!({ "username": "al ice!", "password": TEST_PASSWORD }),
            "Username may only contain letters, numbers and underscores.",
        ),
        (json!({ "username": "alice" }), "Password is required."),
        (
            json!({ "username": "alice", "password": "short" }),
            "Password must be between 8 and 72 characters long.",
        ),
    ];

    for (body, message) in cases {
        let response = server.post("/api/v1/user/register").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(response.json::<Value>()["message"], message, "{}", body);
    }
}

#[tokio::test]
async fn test_register_rejects_non_object_body() {
    let server = test_server();

    let response = server.post("/api/v1/user/register").text("not json").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server.post("/api/v1/user/register").json(&json!(["alice"])).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signin_sets_session_cookie() {
    let server = test_server();
    register(&server, "alice", TEST_PASSWORD).await;

    let response = signin(&server, "alice", TEST_PASSWORD).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["message"], "user login successful.");

    let cookie = set_cookie(&response).expect("session cookie");
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("Max-Age=86400"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[tokio::test]
async fn test_signin_production_cookie_is_cross_site() {
    let server = server_with_config(inkpost::backend::server::ServerConfig {
        production: true,
        ..test_config()
    });
    register(&server, "alice", TEST_PASSWORD).await;

    let response = signin(&server, "alice", TEST_PASSWORD).await;
    let cookie = set_cookie(&response).expect("session cookie");

    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("SameSite=None"));
}

#[tokio::test]
async fn test_signin_failures_share_one_message() {
    let server = test_server();
    register(&server, "alice", TEST_PASSWORD).await;

    let wrong_password = signin(&server, "alice", "wrong-password").await;
    let unknown_user = signin(&server, "mallory", TEST_PASSWORD).await;

    assert_eq!(wrong_password.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_user.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.json::<Value>(), unknown_user.json::<Value>());
    assert_eq!(
        unknown_user.json::<Value>()["message"],
        "Invalid username or password."
    );
    assert!(set_cookie(&wrong_password).is_none());
}

#[tokio::test]
async fn test_signin_without_secret_is_internal_error() {
    let server = server_with_config(inkpost::backend::server::ServerConfig {
        jwt_secret: None,
        ..test_config()
    });
    register(&server, "alice", TEST_PASSWORD).await;

    let response = signin(&server, "alice", TEST_PASSWORD).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["message"], "Internal server error.");
}

#[tokio::test]
async fn test_me_with_valid_session() {
    let server = test_server();
    let cookie = signed_in(&server, "alice").await;

    let response = with_session(server.get("/api/v1/user/me"), &cookie).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["user"]["username"], "alice");
    assert!(body["user"]["id"].is_string());
    assert!(body["user"]["createdAt"].is_string());
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_me_without_session() {
    let server = test_server();

    let response = server.get("/api/v1/user/me").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["message"], "Please login.");
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn test_expired_session_is_rejected_and_cleared() {
    let server = test_server();

    let response = with_session(server.get("/api/v1/user/me"), &expired_session(Uuid::new_v4())).await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>()["message"], "Invalid or expired token.");
    let cleared = set_cookie(&response).expect("cookie is cleared");
    assert!(cleared.starts_with("token=;") || cleared.starts_with("token=\"\""));
    assert!(cleared.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_forged_session_is_rejected() {
    let server = test_server();

    let response = with_session(server.get("/api/v1/user/me"), &forged_session(Uuid::new_v4())).await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert!(set_cookie(&response).is_some());
}

#[tokio::test]
async fn test_tampered_session_is_rejected() {
    let server = test_server();
    let cookie = signed_in(&server, "alice").await;
    let tampered = format!("{}x", cookie);

    let response = with_session(server.get("/api/v1/user/me"), &tampered).await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_signout_clears_cookie() {
    let server = test_server();

    let response = server.post("/api/v1/user/signout").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let cleared = set_cookie(&response).expect("cookie is cleared");
    assert!(cleared.starts_with("token="));
    assert!(cleared.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = test_server();

    let response = server.get("/api/v1/nothing/here").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({ "message": "Route not found." }));
}
