//! Post Module
//!
//! Listing, detail, create, update and delete for blog posts.
//!
//! ```text
//! posts/
//! ├── mod.rs        - Module exports
//! ├── pagination.rs - page/limit parsing and the listing body
//! └── handlers.rs   - HTTP handlers
//! ```

/// Page/limit handling
pub mod pagination;

/// HTTP handlers for `/api/v1/post`
pub mod handlers;

pub use handlers::{create_post, delete_post, get_post, list_my_posts, list_posts, update_post};
pub use pagination::{ListQuery, Pagination, PostPage};
