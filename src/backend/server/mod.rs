//! Server Module
//!
//! Startup code: configuration loading, shared state and application
//! assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── config.rs - ServerConfig and database connection
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - create_app
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
