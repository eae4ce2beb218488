//! Structured error entry and the shared `[code] message` formatter.

use std::fmt;

/// A single reported error: integer code plus text message.
///
/// Fields are private so an entry cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PidlError {
    code: i64,
    message: String,
}

impl PidlError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PidlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Format an error the way SAS collectors report it: `[code] message`.
pub fn format_error(code: i64, message: &str) -> String {
    format!("[{}] {}", code, message)
}
