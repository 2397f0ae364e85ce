//! Error taxonomy for benchsift
//!
//! Configuration errors are raised before any table is touched. Malformed
//! table shapes are not detected here; they are the statistics engine's
//! responsibility.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library
#[derive(Error, Debug)]
pub enum SiftError {
    #[error("invalid failed threshold argument: {0} (must be within 0..=100)")]
    InvalidThreshold(f64),

    #[error("invalid alpha argument: {0} (must be within 0..1)")]
    InvalidAlpha(f64),

    #[error("invalid delta-test argument: {0}")]
    InvalidDeltaTest(String),

    #[error("invalid sort argument: {0}")]
    InvalidOrder(String),

    #[error("invalid format {0}")]
    InvalidFormat(String),

    #[error("expected at least 1 input, the statistics engine output")]
    MissingInput,

    #[error("failed to read {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed comparison tables in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config file {path}: {message}")]
    ConfigFile { path: PathBuf, message: String },
}

impl SiftError {
    /// True for errors raised while validating configuration
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SiftError::InvalidThreshold(_)
                | SiftError::InvalidAlpha(_)
                | SiftError::InvalidDeltaTest(_)
                | SiftError::InvalidOrder(_)
                | SiftError::InvalidFormat(_)
                | SiftError::MissingInput
                | SiftError::ConfigFile { .. }
        )
    }
}

/// Result type for benchsift operations
pub type Result<T> = std::result::Result<T, SiftError>;
