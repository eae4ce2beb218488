//! Configuration errors.

use super::error_code::{self, PidlErrorCode};

/// Errors raised while loading, parsing or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("{field} is out of range: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("{field} has an unusable value {message}")]
    InvalidValue { field: String, message: String },
}

impl PidlErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
