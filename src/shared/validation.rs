//! Request payload schemas
//!
//! Every inbound body goes through [`parse`] before anything touches the
//! store. A schema deserializes the raw JSON object (unknown keys are
//! ignored), normalizes it (trims text, treats blank strings as missing),
//! runs the `validator` rules and returns a typed value. When several rules
//! fail, the error reported is the first one in the schema's field order.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::shared::error::SharedError;

/// A payload type that can be checked into a typed value
pub trait Schema: DeserializeOwned {
    /// The normalized value produced on success
    type Output;

    /// Fields in the order their errors are reported
    const FIELD_ORDER: &'static [&'static str];

    /// Normalize, validate and convert the payload
    fn check(self) -> Result<Self::Output, SharedError>;
}

/// Parse a raw request body against a schema
pub fn parse<S: Schema>(body: &[u8]) -> Result<S::Output, SharedError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(SharedError::serialization("Invalid request body."));
    }
    let payload: S = serde_json::from_value(value)?;
    payload.check()
}

/// Pick the first failing rule, walking fields in `order`
fn first_error(errors: &ValidationErrors, order: &[&str]) -> SharedError {
    let by_field = errors.field_errors();
    for field in order {
        if let Some(error) = by_field.get(field).and_then(|list| list.first()) {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {}.", field));
            return SharedError::validation(*field, message);
        }
    }
    SharedError::validation("body", "Invalid data.")
}

fn run<S: Validate>(
    payload: &S,
    order: &[&str],
    extra: impl FnOnce(&mut ValidationErrors),
) -> Result<(), SharedError> {
    let mut errors = payload.validate().err().unwrap_or_else(ValidationErrors::new);
    extra(&mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(first_error(&errors, order))
    }
}

/// Trim the value and drop it when nothing is left
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Username and password, as sent to `/register` and `/signin`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CredentialsPayload {
    #[serde(default)]
    #[validate(
        required(message = "Username is required."),
        length(min = 3, max = 30, message = "Username must be between 3 and 30 characters long.")
    )]
    pub username: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "Password is required."),
        length(min = 8, max = 72, message = "Password must be between 8 and 72 characters long.")
    )]
    pub password: Option<String>,
}

/// Validated credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Schema for CredentialsPayload {
    type Output = Credentials;
    const FIELD_ORDER: &'static [&'static str] = &["username", "password"];

    fn check(self) -> Result<Credentials, SharedError> {
        let payload = CredentialsPayload {
            username: non_blank(self.username),
            // Passwords are taken verbatim; only an empty one counts as missing.
            password: self.password.filter(|p| !p.is_empty()),
        };

        run(&payload, Self::FIELD_ORDER, |errors| {
            let bad_chars = payload
                .username
                .as_deref()
                .is_some_and(|u| !u.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
            if bad_chars {
                errors.add(
                    "username",
                    rule("charset", "Username may only contain letters, numbers and underscores."),
                );
            }
        })?;

        match (payload.username, payload.password) {
            (Some(username), Some(password)) => Ok(Credentials { username, password }),
            _ => Err(SharedError::validation("body", "Invalid data.")),
        }
    }
}

/// Post fields, as sent to create and update
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    #[serde(default)]
    #[validate(
        required(message = "Title is required."),
        length(max = 150, message = "Title must be at most 150 characters long.")
    )]
    pub title: Option<String>,

    #[serde(default)]
    #[validate(required(message = "Content is required."))]
    pub content: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "Description is required."),
        length(max = 500, message = "Description must be at most 500 characters long.")
    )]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(url(message = "Image URL must be a valid URL."))]
    pub image_url: Option<String>,
}

/// Validated post fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    pub content: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl Schema for PostPayload {
    type Output = PostInput;
    const FIELD_ORDER: &'static [&'static str] = &["title", "content", "description", "image_url"];

    fn check(self) -> Result<PostInput, SharedError> {
        let payload = PostPayload {
            title: non_blank(self.title),
            content: non_blank(self.content),
            description: non_blank(self.description),
            image_url: non_blank(self.image_url),
        };

        run(&payload, Self::FIELD_ORDER, |_| {})?;

        match (payload.title, payload.content, payload.description) {
            (Some(title), Some(content), Some(description)) => Ok(PostInput {
                title,
                content,
                description,
                image_url: payload.image_url,
            }),
            _ => Err(SharedError::validation("body", "Invalid data.")),
        }
    }
}

/// Comment text and the post it belongs to
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    #[serde(default)]
    #[validate(
        required(message = "comment shouldn't be empty."),
        length(max = 1000, message = "comment must be at most 1000 characters long.")
    )]
    pub comment: Option<String>,

    #[serde(default)]
    #[validate(required(message = "Invalid post details."))]
    pub post_id: Option<String>,
}

/// Validated comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentInput {
    pub comment: String,
    pub post_id: Uuid,
}

impl Schema for CommentPayload {
    type Output = CommentInput;
    const FIELD_ORDER: &'static [&'static str] = &["comment", "post_id"];

    fn check(self) -> Result<CommentInput, SharedError> {
        let payload = CommentPayload {
            comment: non_blank(self.comment),
            post_id: non_blank(self.post_id),
        };

        let post_id = payload.post_id.as_deref().map(Uuid::parse_str);
        run(&payload, Self::FIELD_ORDER, |errors| {
            if matches!(post_id, Some(Err(_))) {
                errors.add("post_id", rule("uuid", "Invalid post details."));
            }
        })?;

        match (payload.comment, post_id) {
            (Some(comment), Some(Ok(post_id))) => Ok(CommentInput { comment, post_id }),
            _ => Err(SharedError::validation("body", "Invalid data.")),
        }
    }
}
