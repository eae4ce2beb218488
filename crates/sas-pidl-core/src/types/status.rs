//! Transport status, client status, and the mapping between them.

use std::fmt;

use super::BinData;

/// Status reported by a transport for a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportStatus {
    Ok,
    NotImplemented,
    Error,
    FatalError,
}

/// Outcome of one client invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvokeStatus {
    Ok,
    NotImplemented,
    Error,
    /// Request encoding or response decoding failed.
    MarshallingError,
    FatalError,
}

impl InvokeStatus {
    /// Map a transport status onto the client vocabulary.
    ///
    /// | transport      | client         |
    /// |----------------|----------------|
    /// | Ok             | Ok             |
    /// | NotImplemented | NotImplemented |
    /// | Error          | Error          |
    /// | FatalError     | FatalError     |
    ///
    /// `MarshallingError` never comes from the transport.
    pub fn from_transport(status: TransportStatus) -> Self {
        match status {
            TransportStatus::Ok => Self::Ok,
            TransportStatus::NotImplemented => Self::NotImplemented,
            TransportStatus::Error => Self::Error,
            TransportStatus::FatalError => Self::FatalError,
        }
    }

    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NotImplemented => "not_implemented",
            Self::Error => "error",
            Self::MarshallingError => "marshalling_error",
            Self::FatalError => "fatal_error",
        }
    }
}

impl From<TransportStatus> for InvokeStatus {
    fn from(status: TransportStatus) -> Self {
        Self::from_transport(status)
    }
}

impl fmt::Display for InvokeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TransportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(InvokeStatus::from_transport(*self).name())
    }
}

/// What a transport hands back: a status plus an output payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: TransportStatus,
    pub payload: BinData,
}

impl TransportResponse {
    pub fn new(status: TransportStatus, payload: BinData) -> Self {
        Self { status, payload }
    }

    /// Successful response carrying `payload`.
    pub fn ok(payload: impl Into<BinData>) -> Self {
        Self::new(TransportStatus::Ok, payload.into())
    }

    /// Response with `status` and no payload.
    pub fn status(status: TransportStatus) -> Self {
        Self::new(status, BinData::new())
    }
}
