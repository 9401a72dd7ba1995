use std::io;
use thiserror::Error;

/// Application-wide error type for everything around the interpretation core.
///
/// Resolution, parsing and coordinate lookup never fail; these variants cover
/// loading reference data, configuration and process setup.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents invalid reference data or input format.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Two entries in the same reference table share a key.
    #[error("Duplicate {table} key: {key}")]
    DuplicateKey { table: &'static str, key: String },

    /// Represents configuration-related errors (e.g., bad environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}
