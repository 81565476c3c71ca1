//! Domain errors for state persistence
//!
//! These are domain-level errors that abstract away infrastructure details
//! (no filesystem error types here). A persistence failure never reaches the
//! reducer path: the store logs it and keeps the in-memory state
//! authoritative for the rest of the session.

use thiserror::Error;

/// Errors that can occur while persisting the application state
#[derive(Error, Debug)]
pub enum StoreError {
    /// The state could not be serialized to JSON
    #[error("State serialization failed: {0}")]
    Serialization(String),

    /// The backing store rejected the write
    #[error("State write failed: {0}")]
    WriteFailure(String),
}

impl StoreError {
    /// Create a serialization error with a message
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a write failure error with a message
    pub fn write_failure(msg: impl Into<String>) -> Self {
        Self::WriteFailure(msg.into())
    }
}

/// Result type alias for persistence operations
pub type Result<T> = std::result::Result<T, StoreError>;
