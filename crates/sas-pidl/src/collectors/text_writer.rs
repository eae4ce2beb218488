//! SAS collector that writes one line per report.

use std::io::Write;

use sas_pidl_core::types::format_error;
use sas_pidl_core::SasErrorCollector;

/// Writes `[code] message` lines to any [`Write`] sink.
///
/// Write failures are logged and otherwise ignored; the display string is
/// returned either way.
pub struct TextWriterErrorCollector<W: Write> {
    writer: W,
}

impl<W: Write> TextWriterErrorCollector<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SasErrorCollector for TextWriterErrorCollector<W> {
    fn add(&mut self, code: i64, message: &str) -> String {
        let line = format_error(code, message);
        if let Err(e) = writeln!(self.writer, "{line}") {
            tracing::warn!(error = %e, code, "Failed to write error report");
        }
        line
    }
}
