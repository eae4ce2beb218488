//! Adapters between the two error collector vocabularies.
//!
//! Both bridges are stateless: they hold one mutable borrow of the wrapped
//! collector and forward every report exactly once.

pub mod pidl_sas;
pub mod sas_pidl;

pub use pidl_sas::PidlSasErrorCollector;
pub use sas_pidl::SasPidlErrorCollector;
