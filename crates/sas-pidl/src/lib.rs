//! # sas-pidl
//!
//! Client-side glue between PIDL documents and SAS transports.
//! Provides the error collector bridges between the SAS and PIDL
//! vocabularies, a small XML document model with its compact JSON
//! mapping, and the client helper that runs one request/response cycle.

pub mod bridge;
pub mod client;
pub mod codec;
pub mod collectors;

pub use bridge::{PidlSasErrorCollector, SasPidlErrorCollector};
pub use client::{InvokeOutcome, JsonClientHelper};
pub use codec::{Document, Element, JsonCodec, Node};
