//! API integration tests
//!
//! HTTP-level tests against the full router backed by the in-memory store.

#[path = "../../common/mod.rs"]
mod common;

mod auth_test;
mod comments_test;
