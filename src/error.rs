//! Error types for the club state store
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ClubError
pub type Result<T> = std::result::Result<T, ClubError>;

/// Unified error type for club operations
#[derive(Debug, Error)]
pub enum ClubError {
    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // State Errors
    // -------------------------------------------------------------------------
    #[error("nothing to operate on: {0}")]
    EmptyState(String),

    #[error("no book is currently being read")]
    NoActiveBook,

    #[error("no meeting is scheduled")]
    NoMeeting,

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl From<std::io::Error> for ClubError {
    fn from(err: std::io::Error) -> Self {
        ClubError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for ClubError {
    fn from(err: serde_json::Error) -> Self {
        ClubError::Persistence(err.to_string())
    }
}
