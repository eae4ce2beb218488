//! SAS collector backed by a closure.

use sas_pidl_core::types::format_error;
use sas_pidl_core::SasErrorCollector;

/// Calls `f` for every report and answers with `[code] message`.
pub struct SimpleErrorCollector<F>
where
    F: FnMut(i64, &str),
{
    f: F,
}

impl<F> SimpleErrorCollector<F>
where
    F: FnMut(i64, &str),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> SasErrorCollector for SimpleErrorCollector<F>
where
    F: FnMut(i64, &str),
{
    fn add(&mut self, code: i64, message: &str) -> String {
        (self.f)(code, message);
        format_error(code, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calls_closure_and_formats() {
        let mut seen = Vec::new();
        let mut collector = SimpleErrorCollector::new(|code, msg: &str| seen.push((code, msg.to_string())));
        assert_eq!(collector.add(5, "five"), "[5] five");
        drop(collector);
        assert_eq!(seen, vec![(5, "five".to_string())]);
    }
}
