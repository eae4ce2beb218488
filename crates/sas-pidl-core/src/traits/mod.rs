//! Collector and transport seams.

pub mod error_collector;
pub mod transport;

pub use error_collector::{PidlErrorCollector, SasErrorCollector};
pub use transport::Transport;
