//! Post and comment fixtures

use axum_test::TestServer;
use serde_json::{json, Value};

use super::auth_helpers::with_session;

pub fn post_body(title: &str) -> Value {
    json!({
        "title": title,
        "content": format!("Content of {}", title),
        "description": format!("About {}", title),
        "imageUrl": "https://images.example.com/cover.png"
    })
}

/// Create a post as `cookie` and return the `post` object
pub async fn create_post(server: &TestServer, cookie: &str, body: Value) -> Value {
    let response = with_session(server.post("/api/v1/post/"), cookie).json(&body).await;
    assert_eq!(response.status_code(), 201, "create post failed: {}", response.text());
    response.json::<Value>()["post"].clone()
}

pub async fn create_titled_post(server: &TestServer, cookie: &str, title: &str) -> Value {
    create_post(server, cookie, post_body(title)).await
}

/// Comment on a post as `cookie` and return the `comment` object
pub async fn create_comment(server: &TestServer, cookie: &str, post_id: &str, text: &str) -> Value {
    let response = with_session(server.post("/api/v1/post/comment"), cookie)
        .json(&json!({ "comment": text, "postId": post_id }))
        .await;
    assert_eq!(response.status_code(), 201, "create comment failed: {}", response.text());
    response.json::<Value>()["comment"].clone()
}

pub fn id_of(value: &Value) -> String {
    value["id"].as_str().expect("object has an id").to_string()
}
