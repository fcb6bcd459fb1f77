//! Error types for rosterdesk
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for rosterdesk operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Slot Store Errors
    // -------------------------------------------------------------------------
    #[error("Slot file corruption detected: {0}")]
    SlotCorruption(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The persisted collection is not valid JSON. Fatal at startup.
    #[error("Malformed data in slot `{slot}`: {source}")]
    MalformedStoredData {
        slot: &'static str,
        #[source]
        source: serde_json::Error,
    },

    // -------------------------------------------------------------------------
    // Roster Errors
    // -------------------------------------------------------------------------
    #[error("Not logged in")]
    Unauthenticated,

    #[error("Invalid salary: {0:?}")]
    InvalidSalary(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<bincode::Error> for RosterError {
    fn from(err: bincode::Error) -> Self {
        RosterError::Serialization(err.to_string())
    }
}
