//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by resource into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly, CORS, tracing, fallback
//! ├── user_routes.rs  - /api/v1/user
//! └── post_routes.rs  - /api/v1/post (posts and comments)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use inkpost::backend::routes::create_router;
//! use inkpost::backend::server::{AppState, ServerConfig};
//! use inkpost::backend::store::MemoryStore;
//!
//! let state = AppState::new(MemoryStore::new(), ServerConfig::default());
//! let router = create_router(state);
//! ```

/// Main router creation
pub mod router;

/// User account routes
pub mod user_routes;

/// Post and comment routes
pub mod post_routes;

pub use router::create_router;
