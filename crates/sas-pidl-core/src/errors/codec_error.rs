//! Marshalling errors between XML documents and compact JSON payloads.

use super::error_code::{self, PidlErrorCode};

/// Errors raised while encoding a request or decoding a response.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Invalid XML: {0}")]
    InvalidXml(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid UTF-8 in payload: {0}")]
    InvalidUtf8(String),

    #[error("Payload root must be an object with a single element entry, got {found}")]
    InvalidRoot { found: String },

    #[error("Unsupported construct at {path}: {message}")]
    UnsupportedConstruct { path: String, message: String },

    #[error("Nesting deeper than {max} levels")]
    DepthExceeded { max: usize },

    #[error("Empty response payload")]
    EmptyPayload,
}

impl PidlErrorCode for CodecError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyPayload => error_code::EMPTY_PAYLOAD,
            Self::UnsupportedConstruct { .. } => error_code::UNSUPPORTED_CONSTRUCT,
            Self::DepthExceeded { .. } => error_code::DEPTH_EXCEEDED,
            _ => error_code::CODEC_ERROR,
        }
    }
}
