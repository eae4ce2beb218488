//! The two error collector vocabularies.
//!
//! SAS collectors answer every report with a display string. PIDL
//! collectors return nothing and also accept a ready-made [`PidlError`].

use crate::types::PidlError;

/// Error sink in the SAS vocabulary.
pub trait SasErrorCollector {
    /// Report an error and return its display form.
    fn add(&mut self, code: i64, message: &str) -> String;
}

/// Error sink in the PIDL vocabulary.
pub trait PidlErrorCollector {
    /// Report an error by its loose fields.
    fn add(&mut self, code: i64, message: &str);

    /// Report a structured error. Same effect as `add(error.code(), error.message())`.
    fn add_error(&mut self, error: &PidlError) {
        self.add(error.code(), error.message());
    }
}

impl<C: SasErrorCollector + ?Sized> SasErrorCollector for &mut C {
    fn add(&mut self, code: i64, message: &str) -> String {
        (**self).add(code, message)
    }
}

impl<C: PidlErrorCollector + ?Sized> PidlErrorCollector for &mut C {
    fn add(&mut self, code: i64, message: &str) {
        (**self).add(code, message)
    }

    fn add_error(&mut self, error: &PidlError) {
        (**self).add_error(error)
    }
}
