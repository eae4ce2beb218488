//! PIDL-facing view of a SAS collector.

use sas_pidl_core::{PidlError, PidlErrorCollector, SasErrorCollector};

/// Presents a [`SasErrorCollector`] as a [`PidlErrorCollector`].
/// The display string the SAS side returns is dropped.
pub struct SasPidlErrorCollector<'a, C: SasErrorCollector + ?Sized> {
    inner: &'a mut C,
}

impl<'a, C: SasErrorCollector + ?Sized> SasPidlErrorCollector<'a, C> {
    pub fn new(inner: &'a mut C) -> Self {
        Self { inner }
    }
}

impl<C: SasErrorCollector + ?Sized> PidlErrorCollector for SasPidlErrorCollector<'_, C> {
    fn add(&mut self, code: i64, message: &str) {
        let _ = self.inner.add(code, message);
    }

    fn add_error(&mut self, error: &PidlError) {
        self.add(error.code(), error.message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(i64, String)>,
    }

    impl SasErrorCollector for Recorder {
        fn add(&mut self, code: i64, message: &str) -> String {
            self.calls.push((code, message.to_string()));
            "ignored".to_string()
        }
    }

    #[test]
    fn test_add_forwards_fields() {
        let mut recorder = Recorder::default();
        SasPidlErrorCollector::new(&mut recorder).add(12, "timeout");
        assert_eq!(recorder.calls, vec![(12, "timeout".to_string())]);
    }

    #[test]
    fn test_add_error_matches_add() {
        let entry = PidlError::new(3, "denied");

        let mut by_entry = Recorder::default();
        SasPidlErrorCollector::new(&mut by_entry).add_error(&entry);

        let mut by_fields = Recorder::default();
        SasPidlErrorCollector::new(&mut by_fields).add(entry.code(), entry.message());

        assert_eq!(by_entry.calls, by_fields.calls);
        assert_eq!(by_entry.calls.len(), 1);
    }
}
