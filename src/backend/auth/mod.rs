//! Authentication Module
//!
//! User accounts, password hashing, session tokens and the user endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports and documentation
//! ├── users.rs    - User record and bcrypt helpers
//! ├── sessions.rs - TokenService and session cookie
//! └── handlers/   - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → bcrypt hash stored → 201
//! 2. **Sign in**: credentials verified → JWT issued in the `token` cookie (24h)
//! 3. **Protected request**: cookie verified by the `AuthUser` extractor
//! 4. **Sign out**: cookie expired on the client

/// User record and password hashing
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for the user endpoints
pub mod handlers;

pub use handlers::{get_me, register, signin, signout};
pub use sessions::TokenService;
