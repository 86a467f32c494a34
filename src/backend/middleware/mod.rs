//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - the `AuthUser` extractor guarding protected routes

pub mod auth;

pub use auth::{session_token, AuthUser};
