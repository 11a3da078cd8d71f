//! Submission pipeline: build → submit → report.
//!
//! # Responsibilities
//! - Drive a built request through `Built → Submitted → {Confirmed | Rejected}`
//! - Enforce the caller-supplied retry policy and optional timeout
//! - Route read-only queries through the same client boundary
//!
//! The dispatcher holds no state across calls beyond its configuration;
//! parallel submissions are independent invocations and need no
//! coordination.

use std::time::Duration;

use tokio::time::timeout;

use crate::clarity::DecodedValue;
use crate::query::ReadOnlyCall;
use crate::request::OperationRequest;
use crate::resilience::RetryPolicy;
use crate::submit::client::LedgerClient;
use crate::submit::reporter;
use crate::types::{DispatchResult, NetworkTarget, OperationState, SubmissionResult, TransactionId};

/// Drives requests through the submission pipeline against one network.
#[derive(Debug, Clone)]
pub struct Dispatcher<C> {
    client: C,
    network: NetworkTarget,
    retry: RetryPolicy,
    submit_timeout: Option<Duration>,
}

impl<C: LedgerClient> Dispatcher<C> {
    pub fn new(client: C, network: NetworkTarget) -> Self {
        Self {
            client,
            network,
            retry: RetryPolicy::none(),
            submit_timeout: None,
        }
    }

    /// Retry rejected submissions according to `policy`.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Abort a submission attempt that exceeds `limit`. Elapsed attempts
    /// count as rejections.
    pub fn with_submit_timeout(mut self, limit: Duration) -> Self {
        self.submit_timeout = Some(limit);
        self
    }

    pub fn network(&self) -> &NetworkTarget {
        &self.network
    }

    /// Submit a built request and report the outcome.
    ///
    /// Cancellation is caller-driven: dropping the returned future abandons
    /// the round trip. The ledger stays authoritative about whether the
    /// transaction landed.
    pub async fn submit(&self, request: &OperationRequest) -> DispatchResult<TransactionId> {
        tracing::debug!(
            operation = request.operation().kind_name(),
            target = %request.operation().target(),
            fee = request.fee(),
            state = OperationState::Built.as_str(),
            "request entering pipeline"
        );

        let max_attempts = self.retry.max_attempts();
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            tracing::info!(
                operation = request.operation().kind_name(),
                network = %self.network,
                attempt,
                state = OperationState::Submitted.as_str(),
                "submitting request"
            );

            match self.submit_once(request).await {
                SubmissionResult::Failure { message } if attempt < max_attempts => {
                    let delay = self.retry.delay_before(attempt + 1);
                    tracing::warn!(
                        attempt,
                        error = %message,
                        delay_ms = delay.as_millis() as u64,
                        "submission rejected, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                outcome => return reporter::report(outcome, &self.network),
            }
        }
    }

    async fn submit_once(&self, request: &OperationRequest) -> SubmissionResult {
        match self.submit_timeout {
            Some(limit) => {
                match timeout(limit, self.client.sign_and_submit(request, &self.network)).await {
                    Ok(outcome) => outcome,
                    Err(_) => SubmissionResult::failure(format!(
                        "submission timed out after {:?}",
                        limit
                    )),
                }
            }
            None => self.client.sign_and_submit(request, &self.network).await,
        }
    }

    /// Execute a read-only query and return the decoded value.
    pub async fn query(&self, call: &ReadOnlyCall) -> DispatchResult<DecodedValue> {
        tracing::debug!(
            contract = %call.contract(),
            function = call.function(),
            network = %self.network,
            "read-only query"
        );
        self.client.call_read_only(call, &self.network).await
    }

    /// Query helper for unsigned-integer results (balances, total supply).
    pub async fn query_uint(&self, call: &ReadOnlyCall) -> DispatchResult<u128> {
        self.query(call).await?.as_uint()
    }
}
