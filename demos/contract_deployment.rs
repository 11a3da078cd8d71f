//! Deploy a Clarity smart contract through the dispatch pipeline.
//!
//! Builds a deploy request for a small counter contract, submits it, and
//! reports the transaction id with its explorer link. The ledger client is
//! a stub that pretends the node accepted the transaction; swap in a real
//! client implementation to broadcast for real.

use stacks_dispatch::clarity::DecodedValue;
use stacks_dispatch::query::ReadOnlyCall;
use stacks_dispatch::request::{OperationRequest, RequestBuilder, SigningKey};
use stacks_dispatch::submit::reporter;
use stacks_dispatch::types::{
    DispatchError, DispatchResult, NetworkTarget, SubmissionResult, TransactionId,
};
use stacks_dispatch::{DispatchConfig, Dispatcher, LedgerClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Throwaway demo key; never commit real key material.
const SENDER_KEY: &str = "0000000000000000000000000000000000000000000000000000000000000001";

const CONTRACT_SOURCE: &str = r#"
;; Simple Counter Contract
(define-data-var counter uint u0)

(define-public (increment)
  (begin
    (var-set counter (+ (var-get counter) u1))
    (ok (var-get counter))
  )
)

(define-public (decrement)
  (begin
    (var-set counter (- (var-get counter) u1))
    (ok (var-get counter))
  )
)

(define-read-only (get-counter)
  (var-get counter)
)
"#;

/// Stub ledger that accepts every submission with a canned transaction id.
struct StubLedger;

impl LedgerClient for StubLedger {
    async fn sign_and_submit(
        &self,
        request: &OperationRequest,
        network: &NetworkTarget,
    ) -> SubmissionResult {
        tracing::debug!(
            operation = request.operation().kind_name(),
            network = %network,
            "stub ledger signing and broadcasting"
        );
        let txid = TransactionId::new("0x9f1e66ad2a6e7b3c41d8").expect("stub txid is non-empty");
        SubmissionResult::success(txid)
    }

    async fn call_read_only(
        &self,
        _call: &ReadOnlyCall,
        _network: &NetworkTarget,
    ) -> DispatchResult<DecodedValue> {
        Err(DispatchError::QueryFailed(
            "stub ledger answers no queries".to_string(),
        ))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stacks_dispatch=debug,contract_deployment=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DispatchConfig::default();
    let network = config
        .network
        .network_target()
        .unwrap_or(NetworkTarget::Testnet);

    let request = RequestBuilder::deploy("my-counter", CONTRACT_SOURCE)
        .fee(config.fees.deploy_microstx)
        .signer(SigningKey::from_hex(SENDER_KEY)?)
        .build()?;

    let dispatcher = Dispatcher::new(StubLedger, network);
    let txid = dispatcher.submit(&request).await?;

    tracing::info!(
        txid = %txid,
        explorer = %reporter::explorer_url(&txid, dispatcher.network()),
        "deployment initiated"
    );

    Ok(())
}
