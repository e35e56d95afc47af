//! Common error types for FinedOut

use thiserror::Error;

/// Common result type for FinedOut operations
pub type Result<T> = std::result::Result<T, Error>;

/// Storage, configuration and decoding errors
///
/// Ledger rule violations (blank names, bad step input) live in
/// [`crate::ledger::LedgerError`]; they are recovered locally and never
/// reach this type.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Stored people list is present but not valid JSON of the expected shape
    #[error("Deserialization error: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// People list could not be encoded for storage
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Invalid stored or user-supplied value
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
