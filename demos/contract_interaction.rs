//! Interact with a deployed voting contract.
//!
//! Shows the two call paths side by side: a read-only proposal lookup (no
//! key, no fee, no broadcast) and two state-changing calls (create a
//! proposal, vote on it). The stub ledger answers queries from canned JSON
//! and accepts submissions with sequential transaction ids.

use std::sync::atomic::{AtomicU32, Ordering};

use serde_json::json;

use stacks_dispatch::clarity::{ClarityValue, ContractId, DecodedValue};
use stacks_dispatch::query::ReadOnlyCall;
use stacks_dispatch::request::{OperationRequest, RequestBuilder, SigningKey};
use stacks_dispatch::types::{
    DispatchError, DispatchResult, NetworkTarget, SubmissionResult, TransactionId,
};
use stacks_dispatch::{DispatchConfig, Dispatcher, LedgerClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CONTRACT_ADDRESS: &str = "SP2PEBKJ2W1ZDDF2QQ6Y4FXKZEDPT9J9R2NKD9WJB";
const CONTRACT_NAME: &str = "voting";

// Throwaway demo key; never commit real key material.
const SENDER_KEY: &str = "0000000000000000000000000000000000000000000000000000000000000001";

/// Stub ledger: canned proposal data, sequential txids for submissions.
#[derive(Default)]
struct StubLedger {
    submissions: AtomicU32,
}

impl LedgerClient for StubLedger {
    async fn sign_and_submit(
        &self,
        request: &OperationRequest,
        network: &NetworkTarget,
    ) -> SubmissionResult {
        let seq = self.submissions.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            operation = request.operation().kind_name(),
            target = %request.operation().target(),
            network = %network,
            "stub ledger signing and broadcasting"
        );
        let txid = TransactionId::new(format!("0x51c0{:04x}", seq)).expect("stub txid is non-empty");
        SubmissionResult::success(txid)
    }

    async fn call_read_only(
        &self,
        call: &ReadOnlyCall,
        _network: &NetworkTarget,
    ) -> DispatchResult<DecodedValue> {
        match call.function() {
            "get-proposal" => Ok(DecodedValue::new(json!({
                "success": true,
                "value": {
                    "title": {"type": "(string-ascii 64)", "value": "Increase Treasury"},
                    "votes-for": {"type": "uint", "value": "1200"},
                    "votes-against": {"type": "uint", "value": "400"}
                }
            }))),
            other => Err(DispatchError::QueryFailed(format!(
                "stub ledger has no data for {}",
                other
            ))),
        }
    }
}

async fn get_proposal<C: LedgerClient>(
    dispatcher: &Dispatcher<C>,
    contract: &ContractId,
    proposal_id: u128,
) -> Result<DecodedValue, Box<dyn std::error::Error>> {
    let call = ReadOnlyCall::new(
        contract.clone(),
        "get-proposal",
        CONTRACT_ADDRESS.parse()?, // any valid address works as the nominal sender
    )?
    .arg(ClarityValue::uint(proposal_id));

    let proposal = dispatcher.query(&call).await?.unwrap_response()?;
    tracing::info!(proposal = %proposal.as_json(), "proposal fetched");
    Ok(proposal)
}

async fn create_proposal<C: LedgerClient>(
    dispatcher: &Dispatcher<C>,
    contract: &ContractId,
    fee: u64,
    title: &str,
    description: &str,
    duration_blocks: u128,
) -> Result<TransactionId, Box<dyn std::error::Error>> {
    let request = RequestBuilder::call(contract.clone(), "create-proposal")
        .arg(ClarityValue::ascii(title)?)
        .arg(ClarityValue::ascii(description)?)
        .arg(ClarityValue::uint(duration_blocks))
        .fee(fee)
        .signer(SigningKey::from_hex(SENDER_KEY)?)
        .build()?;

    let txid = dispatcher.submit(&request).await?;
    tracing::info!(txid = %txid, "proposal created");
    Ok(txid)
}

async fn vote<C: LedgerClient>(
    dispatcher: &Dispatcher<C>,
    contract: &ContractId,
    fee: u64,
    proposal_id: u128,
    option_id: u128,
    weight: u128,
) -> Result<TransactionId, Box<dyn std::error::Error>> {
    let request = RequestBuilder::call(contract.clone(), "vote")
        .args([
            ClarityValue::uint(proposal_id),
            ClarityValue::uint(option_id),
            ClarityValue::uint(weight),
        ])
        .fee(fee)
        .signer(SigningKey::from_hex(SENDER_KEY)?)
        .build()?;

    let txid = dispatcher.submit(&request).await?;
    tracing::info!(txid = %txid, "vote cast");
    Ok(txid)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stacks_dispatch=debug,contract_interaction=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DispatchConfig::default();
    let contract: ContractId = format!("{}.{}", CONTRACT_ADDRESS, CONTRACT_NAME).parse()?;
    let dispatcher = Dispatcher::new(StubLedger::default(), NetworkTarget::Mainnet);

    // Read path: no key needed
    get_proposal(&dispatcher, &contract, 0).await?;

    // Write path: requires a signing key and a fee
    create_proposal(
        &dispatcher,
        &contract,
        config.fees.call_microstx,
        "Increase Treasury",
        "Raise the treasury allocation by 10%",
        10_080, // roughly 7 days in blocks
    )
    .await?;

    vote(&dispatcher, &contract, 30_000, 0, 0, 100).await?;

    Ok(())
}
