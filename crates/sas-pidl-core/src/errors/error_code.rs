//! PidlErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable code string
/// that callers can match on without parsing messages.
pub trait PidlErrorCode {
    /// Returns the error code string (e.g., "CODEC_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted display string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CODEC_ERROR: &str = "CODEC_ERROR";
pub const EMPTY_PAYLOAD: &str = "EMPTY_PAYLOAD";
pub const UNSUPPORTED_CONSTRUCT: &str = "UNSUPPORTED_CONSTRUCT";
pub const DEPTH_EXCEEDED: &str = "DEPTH_EXCEEDED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
