//! JSON client helper: document in, document out, one transport call.

use sas_pidl_core::config::{ClientConfig, MarshallingPolicy};
use sas_pidl_core::errors::{ClientError, CodecError};
use sas_pidl_core::{InvokeStatus, PidlErrorCollector, Transport};

use crate::bridge::PidlSasErrorCollector;
use crate::codec::{Document, JsonCodec};

/// Code reported to the caller's collector when marshalling fails.
pub const MARSHALLING_ERROR_CODE: i64 = -1;

/// Result of one invocation. A response document is present only when
/// the status is `Ok`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeOutcome {
    pub status: InvokeStatus,
    pub response: Option<Document>,
}

impl InvokeOutcome {
    pub fn ok(response: Document) -> Self {
        Self {
            status: InvokeStatus::Ok,
            response: Some(response),
        }
    }

    pub fn without_response(status: InvokeStatus) -> Self {
        Self {
            status,
            response: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    pub fn into_response(self) -> Option<Document> {
        self.response
    }
}

/// Runs a single request/response cycle against a transport.
///
/// The request is encoded as compact JSON, sent once, and an `Ok` reply is
/// decoded back into a document. Other transport statuses map one-to-one
/// onto [`InvokeStatus`] and carry no response. The helper keeps no state
/// between calls.
pub struct JsonClientHelper<T: Transport> {
    transport: T,
    codec: JsonCodec,
    name: String,
    marshalling: MarshallingPolicy,
}

impl<T: Transport> JsonClientHelper<T> {
    /// Helper with the compiled defaults.
    pub fn new(transport: T) -> Self {
        Self::with_settings(transport, &ClientConfig::default())
    }

    /// Helper configured from `config`, which is validated first. A config
    /// built in code has not been through `PidlConfig::load`.
    pub fn from_config(transport: T, config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        Ok(Self::with_settings(transport, config))
    }

    fn with_settings(transport: T, config: &ClientConfig) -> Self {
        Self {
            transport,
            codec: JsonCodec::new().with_max_depth(config.effective_max_depth()),
            name: config.effective_name().to_string(),
            marshalling: config.effective_marshalling(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marshalling(&self) -> MarshallingPolicy {
        self.marshalling
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request` and decode the reply.
    ///
    /// The transport reports errors through a SAS view of `errors`.
    /// Encode/decode failures follow the configured [`MarshallingPolicy`]:
    /// `Status` reports them to `errors` and returns
    /// `InvokeStatus::MarshallingError`, `Propagate` returns them as `Err`.
    pub fn invoke(
        &self,
        request: &Document,
        errors: &mut dyn PidlErrorCollector,
    ) -> Result<InvokeOutcome, ClientError> {
        let payload = match self.codec.encode(request) {
            Ok(payload) => payload,
            Err(e) => return self.marshalling_failure("JSON encode error", e, errors),
        };

        let response = {
            let mut sas_errors = PidlSasErrorCollector::new(&mut *errors);
            self.transport.invoke(&payload, &mut sas_errors)
        };
        tracing::debug!(
            client = %self.name,
            request_bytes = payload.len(),
            response_bytes = response.payload.len(),
            status = %response.status,
            "Transport invoked"
        );

        match InvokeStatus::from_transport(response.status) {
            InvokeStatus::Ok => {}
            status => {
                tracing::warn!(client = %self.name, status = %status, "Transport did not succeed");
                return Ok(InvokeOutcome::without_response(status));
            }
        }

        match self.codec.decode(&response.payload) {
            Ok(doc) => Ok(InvokeOutcome::ok(doc)),
            Err(e) => self.marshalling_failure("JSON parse error", e, errors),
        }
    }

    fn marshalling_failure(
        &self,
        context: &str,
        error: CodecError,
        errors: &mut dyn PidlErrorCollector,
    ) -> Result<InvokeOutcome, ClientError> {
        match self.marshalling {
            MarshallingPolicy::Propagate => Err(error.into()),
            MarshallingPolicy::Status => {
                let message = format!("{context} ({error})");
                tracing::error!(client = %self.name, code = MARSHALLING_ERROR_CODE, "{message}");
                errors.add(MARSHALLING_ERROR_CODE, &message);
                Ok(InvokeOutcome::without_response(InvokeStatus::MarshallingError))
            }
        }
    }
}
