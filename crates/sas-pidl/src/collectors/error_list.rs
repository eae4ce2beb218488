//! PIDL collector that keeps every report.

use sas_pidl_core::{PidlError, PidlErrorCollector};

/// Accumulates reported errors in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorList {
    errors: Vec<PidlError>,
}

impl ErrorList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[PidlError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<PidlError> {
        self.errors
    }
}

impl PidlErrorCollector for ErrorList {
    fn add(&mut self, code: i64, message: &str) {
        self.errors.push(PidlError::new(code, message));
    }
}
