//! Unified error types.
//! The core (ledger, store, date/time helpers) returns the narrow error
//! enums below; the CLI works with `AppError`, which wraps all of them so
//! that `?` can be used everywhere.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected input for a new entry. Never partially applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount must be a valid integer, got '{0}'")]
    NotAnInteger(String),

    #[error("Amount must be a non-negative number of minutes, got {0}")]
    Negative(i64),

    #[error("Amount '{0}' is too large")]
    TooLarge(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Malformed clock-time string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid time format: '{0}', expected HH:MM")]
    InvalidTime(String),
}

/// Failure while reading or writing the ledger document.
/// A missing document is not an error: it is the bootstrap path.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed ledger document {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Core
    // ---------------------------
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("The ledger has no entries yet")]
    EmptyLedger,

    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
pub type StorageResult<T> = Result<T, StorageError>;
