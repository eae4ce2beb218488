//! SAS-facing view of a PIDL collector.

use sas_pidl_core::types::format_error;
use sas_pidl_core::{PidlErrorCollector, SasErrorCollector};

/// Presents a [`PidlErrorCollector`] as a [`SasErrorCollector`].
///
/// The display string is built here, independent of whatever the wrapped
/// collector does with the report.
pub struct PidlSasErrorCollector<'a, C: PidlErrorCollector + ?Sized> {
    inner: &'a mut C,
}

impl<'a, C: PidlErrorCollector + ?Sized> PidlSasErrorCollector<'a, C> {
    pub fn new(inner: &'a mut C) -> Self {
        Self { inner }
    }
}

impl<C: PidlErrorCollector + ?Sized> SasErrorCollector for PidlSasErrorCollector<'_, C> {
    fn add(&mut self, code: i64, message: &str) -> String {
        self.inner.add(code, message);
        format_error(code, message)
    }
}
