//! XML document model and its compact JSON wire mapping.

pub mod document;
pub mod json;
pub mod xml;

pub use document::{Document, Element, Node};
pub use json::JsonCodec;
