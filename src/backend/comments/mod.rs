//! Comment Module
//!
//! Comments live under the post routes (`/api/v1/post/comment`) but have
//! their own owner: only the comment's writer may delete it.

pub mod handlers;

pub use handlers::{create_comment, delete_comment};
