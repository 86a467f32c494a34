//! Shared Error Types
//!
//! This module defines the errors produced while turning raw request payloads
//! into typed values. They carry a human-readable reason that is safe to show
//! to API clients.
//!
//! # Error Categories
//!
//! - `SerializationError` - the body could not be read as a JSON object
//! - `ValidationError` - a field is missing or breaks a schema rule
//!
//! # Usage
//!
//! ```rust
//! use inkpost::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title is required.");
//! assert_eq!(error.reason(), "Title is required.");
//! ```
use thiserror::Error;

/// Errors raised by the validation layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The reason shown to clients, without the field prefix.
    pub fn reason(&self) -> &str {
        match self {
            Self::SerializationError { message } => message,
            Self::ValidationError { message, .. } => message,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!("Rejected request body: {}", err);
        Self::serialization("Invalid request body.")
    }
}
