//! # sas-pidl-core
//!
//! Shared vocabulary for the SAS/PIDL client adapters.
//! Error entries, binary payloads, status codes, collector and transport
//! traits, error enums, configuration and tracing setup.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

pub use traits::{PidlErrorCollector, SasErrorCollector, Transport};
pub use types::{BinData, InvokeStatus, PidlError, TransportResponse, TransportStatus};
