//! Error types for DuoKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using DuoError
pub type Result<T> = std::result::Result<T, DuoError>;

/// Unified error type for DuoKV operations
#[derive(Debug, Error)]
pub enum DuoError {
    // -------------------------------------------------------------------------
    // Value Errors
    // -------------------------------------------------------------------------
    #[error("Type error: {0}")]
    Type(String),

    // -------------------------------------------------------------------------
    // Arity Errors
    // -------------------------------------------------------------------------
    #[error("Empty arguments")]
    EmptyArgs,

    #[error("Wrong number of arguments")]
    WrongArgs,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // -------------------------------------------------------------------------
    // Bounds Errors
    // -------------------------------------------------------------------------
    #[error("Invalid index range")]
    InvalidRange,

    #[error("Index out of range")]
    IndexOutOfRange,

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Not found: {0}")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Server replied {status}: {message}")]
    Server { status: String, message: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DuoError {
    /// The canonical type error raised by value inference
    pub fn undefined_type() -> Self {
        DuoError::Type("undefined value type".to_string())
    }

    /// Whether this error reports an absent key or file
    pub fn is_not_found(&self) -> bool {
        matches!(self, DuoError::NotFound(_))
    }
}

impl From<serde_json::Error> for DuoError {
    fn from(err: serde_json::Error) -> Self {
        DuoError::Serialization(err.to_string())
    }
}

impl From<bincode::Error> for DuoError {
    fn from(err: bincode::Error) -> Self {
        DuoError::Serialization(err.to_string())
    }
}
