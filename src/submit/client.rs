//! Boundary to the external ledger library.

use crate::clarity::DecodedValue;
use crate::query::ReadOnlyCall;
use crate::request::OperationRequest;
use crate::types::{DispatchResult, NetworkTarget, SubmissionResult};

/// Contract the pipeline consumes from the external ledger library.
///
/// Implementations own signing, wire encoding, and transport. Submission is
/// atomic: the ledger either accepts the encoded transaction (`Success`
/// with an id) or rejects it before any state change (`Failure` with a
/// message). Transport errors surface as `Failure` too; the pipeline never
/// sees a half-applied request.
#[allow(async_fn_in_trait)]
pub trait LedgerClient {
    /// Sign, encode, and broadcast a built request to the given network.
    async fn sign_and_submit(
        &self,
        request: &OperationRequest,
        network: &NetworkTarget,
    ) -> SubmissionResult;

    /// Execute a read-only function call: no signing key, no fee, no
    /// broadcast. The result arrives already decoded to JSON.
    async fn call_read_only(
        &self,
        call: &ReadOnlyCall,
        network: &NetworkTarget,
    ) -> DispatchResult<DecodedValue>;
}
