//! Request/response helper over a [`Transport`](sas_pidl_core::Transport).

pub mod json_client;

pub use json_client::{InvokeOutcome, JsonClientHelper, MARSHALLING_ERROR_CODE};
