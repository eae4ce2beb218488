//! Transport seam used by the client helper.

use std::sync::Arc;

use crate::traits::SasErrorCollector;
use crate::types::{BinData, TransportResponse};

/// A synchronous request/response channel.
///
/// Takes `&self`: a transport shared between callers is responsible for
/// its own synchronization.
pub trait Transport {
    /// Send `request` once and return the status and output payload.
    /// Errors are reported through `errors` in the SAS vocabulary.
    fn invoke(&self, request: &BinData, errors: &mut dyn SasErrorCollector) -> TransportResponse;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn invoke(&self, request: &BinData, errors: &mut dyn SasErrorCollector) -> TransportResponse {
        (**self).invoke(request, errors)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn invoke(&self, request: &BinData, errors: &mut dyn SasErrorCollector) -> TransportResponse {
        (**self).invoke(request, errors)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn invoke(&self, request: &BinData, errors: &mut dyn SasErrorCollector) -> TransportResponse {
        (**self).invoke(request, errors)
    }
}
