//! Error types for configuration loading.
//!
//! Invariants:
//! - Variants name the offending variable or field.
//! - Dotenv errors never include raw `.env` line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Base URL is required. Set OPENSEARCH_URL or call with_base_url().")]
    MissingBaseUrl,

    /// Only one half of a username/password pair was supplied.
    #[error("Incomplete basic auth credentials: {missing} is not set")]
    IncompleteCredentials { missing: &'static str },

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    /// SAFETY: only the byte index of the failure is reported, never the line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
