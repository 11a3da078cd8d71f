//! Shared test double for the external ledger client.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::Value;

use stacks_dispatch::clarity::DecodedValue;
use stacks_dispatch::query::ReadOnlyCall;
use stacks_dispatch::request::OperationRequest;
use stacks_dispatch::types::{DispatchError, DispatchResult, NetworkTarget, SubmissionResult};
use stacks_dispatch::LedgerClient;

/// Programmable in-memory ledger client.
///
/// Submission outcomes are scripted in order; every request and query the
/// client sees is recorded for assertions.
#[derive(Clone, Default)]
pub struct MockLedger {
    inner: Arc<Mutex<Inner>>,
    delay: Option<Duration>,
}

#[derive(Default)]
struct Inner {
    outcomes: VecDeque<SubmissionResult>,
    submissions: Vec<OperationRequest>,
    queries: Vec<String>,
    query_results: HashMap<String, Value>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to each submission only after sleeping, for timeout tests.
    #[allow(dead_code)]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn push_outcome(&self, outcome: SubmissionResult) {
        self.inner.lock().unwrap().outcomes.push_back(outcome);
    }

    #[allow(dead_code)]
    pub fn set_query_result(&self, function: &str, value: Value) {
        self.inner
            .lock()
            .unwrap()
            .query_results
            .insert(function.to_string(), value);
    }

    pub fn submission_count(&self) -> usize {
        self.inner.lock().unwrap().submissions.len()
    }

    #[allow(dead_code)]
    pub fn submitted_requests(&self) -> Vec<OperationRequest> {
        self.inner.lock().unwrap().submissions.clone()
    }

    #[allow(dead_code)]
    pub fn query_count(&self) -> usize {
        self.inner.lock().unwrap().queries.len()
    }
}

impl LedgerClient for MockLedger {
    async fn sign_and_submit(
        &self,
        request: &OperationRequest,
        _network: &NetworkTarget,
    ) -> SubmissionResult {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let mut inner = self.inner.lock().unwrap();
        inner.submissions.push(request.clone());
        inner
            .outcomes
            .pop_front()
            .unwrap_or_else(|| SubmissionResult::failure("mock ledger: no scripted outcome"))
    }

    async fn call_read_only(
        &self,
        call: &ReadOnlyCall,
        _network: &NetworkTarget,
    ) -> DispatchResult<DecodedValue> {
        let mut inner = self.inner.lock().unwrap();
        inner.queries.push(call.function().to_string());
        inner
            .query_results
            .get(call.function())
            .cloned()
            .map(DecodedValue::new)
            .ok_or_else(|| {
                DispatchError::QueryFailed(format!(
                    "mock ledger: no result scripted for {}",
                    call.function()
                ))
            })
    }
}
