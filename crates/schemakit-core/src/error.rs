//! Error handling for SchemaKit
//!
//! The editing engine itself is total: lookups return `Option` and actions
//! whose preconditions do not hold are no-ops. Errors only arise at the
//! edges, when configuration is read from disk or validated.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for SchemaKit
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration value is outside its valid range
    #[error("Invalid configuration value '{key}': {reason}")]
    InvalidConfig {
        /// The configuration key that failed validation.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a validation error for a configuration key
    pub fn invalid_config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a configuration validation error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::InvalidConfig { .. })
    }
}

/// Result type for SchemaKit operations
pub type Result<T> = std::result::Result<T, Error>;
