//! Common test utilities and helpers
//!
//! - Test server over the in-memory store
//! - Authentication helpers (register, sign in, forged tokens)
//! - Post/comment fixtures

#![allow(dead_code)]

pub mod auth_helpers;
pub mod fixtures;
pub mod test_server;

pub use auth_helpers::*;
pub use fixtures::*;
pub use test_server::*;
