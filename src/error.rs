//! Error types for Heronian triangle enumeration.
//!
//! This module provides structured error handling using thiserror. Library
//! functions return [`Result`]; the binary wraps these in `anyhow` at the top.

use thiserror::Error;

/// Main error type for enumeration and reporting.
#[derive(Debug, Error)]
pub enum HeronError {
    /// Invalid input (bad bound, zero side, malformed argument)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Heron's radicand is not positive, so the area is undefined
    #[error("Degenerate triangle ({a}, {b}, {c}): area is undefined")]
    Domain { a: u32, b: u32, c: u32 },

    /// A filter let through a triple it should have rejected
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Output errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for enumeration operations
pub type Result<T> = std::result::Result<T, HeronError>;

impl HeronError {
    /// Shorthand for building an [`HeronError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        HeronError::InvalidArgument(msg.into())
    }
}
