//! Error types for Teamdeck.

use thiserror::Error;

/// The main error type for Teamdeck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A referenced record is missing from the snapshot.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl Error {
    /// Create a new serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a not-found error for a record kind and id.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Result type alias using Teamdeck's Error.
pub type Result<T> = std::result::Result<T, Error>;
