//! Ready-made error collectors.

pub mod error_list;
pub mod simple;
pub mod text_writer;

pub use error_list::ErrorList;
pub use simple::SimpleErrorCollector;
pub use text_writer::TextWriterErrorCollector;
