//! Opaque byte buffer exchanged with the transport.

/// Wire-level payload. Owned by whoever created it; the transport only
/// borrows the request and hands back a fresh response buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinData(Vec<u8>);

impl BinData {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Payload with trailing NUL terminators removed.
    /// C-side transports often hand back zero-terminated buffers.
    pub fn trimmed(&self) -> &[u8] {
        let end = self
            .0
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |pos| pos + 1);
        &self.0[..end]
    }
}

impl From<Vec<u8>> for BinData {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for BinData {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for BinData {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl AsRef<[u8]> for BinData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
