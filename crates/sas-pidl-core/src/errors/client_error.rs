//! Top-level client error.

use super::error_code::PidlErrorCode;
use super::{CodecError, ConfigError};

/// Errors surfaced by the client helper to its caller.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PidlErrorCode for ClientError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Codec(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
