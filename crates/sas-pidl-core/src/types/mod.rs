//! Value types shared by collectors, transports and the client helper.

pub mod bin_data;
pub mod pidl_error;
pub mod status;

pub use bin_data::BinData;
pub use pidl_error::{format_error, PidlError};
pub use status::{InvokeStatus, TransportResponse, TransportStatus};
