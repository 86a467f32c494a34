//! Comment API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::*;

#[tokio::test]
async fn test_create_comment_success() {
    let server = test_server();
    let alice = signed_in(&server, "alice").await;
    let bob = signed_in(&server, "bob").await;
    let post = create_titled_post(&server, &alice, "Post").await;

    let comment = create_comment(&server, &bob, &id_of(&post), "  Nice post  ").await;

    assert_eq!(comment["comment"], "Nice post");
    assert_eq!(comment["postId"], post["id"]);
    assert_eq!(comment["user"], json!({ "username": "bob" }));
    assert!(comment["userId"].is_string());
}

#[tokio::test]
async fn test_create_comment_requires_session() {
    let server = test_server();

    let response = server
        .post("/api/v1/post/comment")
        .json(&json!({ "comment": "hi", "postId": uuid::Uuid::new_v4() }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_comment_validation() {
    let server = test_server();
    let cookie = signed_in(&server, "alice").await;
    let post = create_titled_post(&server, &cookie, "Post").await;
    let post_id = id_of(&post);

    let cases = [
        (json!({ "comment": "", "postId": post_id }), "comment shouldn't be empty."),
        (
            json!({ "comment": "c".repeat(1001), "postId": post_id }),
            "comment must be at most 1000 characters long.",
        ),
        (json!({ "comment": "hi" }), "Invalid post details."),
        (json!({ "comment": "hi", "postId": "42" }), "Invalid post details."),
    ];

    for (body, message) in cases {
        let response = with_session(server.post("/api/v1/post/comment"), &cookie).json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["message"], message);
    }
}

#[tokio::test]
async fn test_create_comment_on_unknown_post() {
    let server = test_server();
    let cookie = signed_in(&server, "alice").await;

    let response = with_session(server.post("/api/v1/post/comment"), &cookie)
        .json(&json!({ "comment": "hi", "postId": uuid::Uuid::new_v4() }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Invalid post details.");
}

#[tokio::test]
async fn test_delete_own_comment() {
    let server = test_server();
    let cookie = signed_in(&server, "alice").await;
    let post = create_titled_post(&server, &cookie, "Post").await;
    let comment = create_comment(&server, &cookie, &id_of(&post), "mine").await;

    let response = with_session(
        server.delete(&format!("/api/v1/post/comment/{}", id_of(&comment))),
        &cookie,
    )
    .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "comment deleted successfully.");
    assert_eq!(body["comment"]["id"], comment["id"]);
    assert_eq!(body["comment"]["comment"], "mine");

    let detail = server
        .get(&format!("/api/v1/post/{}", id_of(&post)))
        .await
        .json::<Value>();
    assert_eq!(detail["post"]["comments"], json!([]));
}

#[tokio::test]
async fn test_delete_other_users_comment_is_forbidden() {
    let server = test_server();
    let alice = signed_in(&server, "alice").await;
    let bob = signed_in(&server, "bob").await;
    let post = create_titled_post(&server, &alice, "Post").await;
    let comment = create_comment(&server, &bob, &id_of(&post), "bob's").await;

    let response = with_session(
        server.delete(&format!("/api/v1/post/comment/{}", id_of(&comment))),
        &alice,
    )
    .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_missing_comment() {
    let server = test_server();
    let cookie = signed_in(&server, "alice").await;

    let response = with_session(
        server.delete(&format!("/api/v1/post/comment/{}", uuid::Uuid::new_v4())),
        &cookie,
    )
    .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Comment doesn't exist.");
}
