//! Inkpost - Blog API Library
//!
//! Inkpost is a small blog backend: users register and sign in, write posts,
//! and comment on each other's posts. Sessions are stateless HS256 JWTs
//! carried in a `token` cookie.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types, payload schemas and validation errors
//! - **`backend`** - Axum server, authentication, handlers and persistence
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkpost::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env();
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for payload validation failures
//! - `backend::error::ApiError` for everything a handler can answer with
//! - `backend::store::StoreError` for persistence failures

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
