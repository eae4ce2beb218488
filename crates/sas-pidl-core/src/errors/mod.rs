//! Error handling for the SAS/PIDL adapters.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod client_error;
pub mod codec_error;
pub mod config_error;
pub mod error_code;

pub use client_error::ClientError;
pub use codec_error::CodecError;
pub use config_error::ConfigError;
pub use error_code::PidlErrorCode;
