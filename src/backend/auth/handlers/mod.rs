//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Response types
//! ├── register.rs - POST /register
//! ├── signin.rs   - POST /signin
//! ├── signout.rs  - POST /signout
//! └── me.rs       - GET /me
//! ```

/// Response types
pub mod types;

/// Registration handler
pub mod register;

/// Sign-in handler
pub mod signin;

/// Sign-out handler
pub mod signout;

/// Current user handler
pub mod me;

pub use types::{MessageResponse, ProfileResponse};

pub use me::get_me;
pub use register::register;
pub use signin::signin;
pub use signout::signout;
