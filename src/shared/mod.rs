//! Shared Module
//!
//! Types that describe the API surface independently of the HTTP server:
//! the resource shapes clients see, the payload schemas inbound bodies are
//! checked against, and the errors that checking produces.

/// Shared error types
pub mod error;

/// Post and comment wire types
pub mod models;

/// Payload schemas and the validation entry point
pub mod validation;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use models::{Author, Comment, CommentView, Post, PostDetail, PostSummary};
pub use validation::{
    parse, CommentInput, CommentPayload, Credentials, CredentialsPayload, PostInput, PostPayload,
    Schema,
};
