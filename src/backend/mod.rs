//! Backend Module
//!
//! All server-side code: the Axum HTTP server, authentication, request
//! handlers and persistence.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Accounts, bcrypt, JWT session cookie, user endpoints
//! - **`middleware`** - The `AuthUser` extractor
//! - **`posts`** - Post endpoints and pagination
//! - **`comments`** - Comment endpoints
//! - **`store`** - `BlogStore` trait with Postgres and in-memory backends
//! - **`error`** - `ApiError` and its HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs       - Module exports and documentation
//! ├── main.rs      - Server binary
//! ├── server/      - Server initialization and state
//! ├── routes/      - Route configuration
//! ├── auth/        - Authentication
//! ├── middleware/  - Request extractors
//! ├── posts/       - Post handlers
//! ├── comments/    - Comment handlers
//! ├── store/       - Persistence
//! └── error/       - Error types
//! ```
//!
//! # Request Flow
//!
//! ```text
//! request → TraceLayer → CorsLayer → route → AuthUser? → handler
//!         → parse::<Schema>? → BlogStore → Json response / ApiError
//! ```

/// Server initialization, state and configuration
pub mod server;

/// HTTP route configuration
pub mod routes;

/// Authentication and user endpoints
pub mod auth;

/// Request extractors
pub mod middleware;

/// Post handlers
pub mod posts;

/// Comment handlers
pub mod comments;

/// Persistence layer
pub mod store;

/// Backend error types
pub mod error;
