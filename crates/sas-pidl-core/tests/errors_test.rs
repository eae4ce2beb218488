//! Tests for the error handling system.

use sas_pidl_core::errors::error_code::{self, PidlErrorCode};
use sas_pidl_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let codec = CodecError::InvalidJson("eof".into());
    assert_eq!(codec.error_code(), error_code::CODEC_ERROR);

    let empty = CodecError::EmptyPayload;
    assert_eq!(empty.error_code(), error_code::EMPTY_PAYLOAD);

    let unsupported = CodecError::UnsupportedConstruct {
        path: "/root/a".into(),
        message: "nested array".into(),
    };
    assert_eq!(unsupported.error_code(), error_code::UNSUPPORTED_CONSTRUCT);

    let config = ConfigError::Unreadable {
        path: "/tmp".into(),
        message: "Is a directory".into(),
    };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn test_from_conversions_keep_inner_code() {
    let client: ClientError = CodecError::EmptyPayload.into();
    assert!(matches!(client, ClientError::Codec(CodecError::EmptyPayload)));
    assert_eq!(client.error_code(), error_code::EMPTY_PAYLOAD);

    let client: ClientError = ConfigError::ValidationFailed {
        field: "client.name".into(),
        message: "must not be empty".into(),
    }
    .into();
    assert!(matches!(client, ClientError::Config(_)));
    assert_eq!(client.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn test_display_string_format() {
    let err = CodecError::EmptyPayload;
    assert_eq!(err.display_string(), "[EMPTY_PAYLOAD] Empty response payload");

    let err = CodecError::InvalidRoot {
        found: "array".into(),
    };
    let s = err.display_string();
    assert!(s.starts_with("[CODEC_ERROR] "));
    assert!(s.contains("got array"));
}
