//! SIP-010 token operations: balance, total supply, guarded transfer.
//!
//! The transfer attaches an asset guard requiring exactly the requested
//! amount to move, with extra movement denied. This is the protection a
//! wallet would attach on a user's behalf.

use serde_json::json;

use stacks_dispatch::clarity::{units, ClarityValue, ContractId, DecodedValue};
use stacks_dispatch::query::ReadOnlyCall;
use stacks_dispatch::request::{AssetGuard, AssetId, OperationRequest, RequestBuilder, SigningKey};
use stacks_dispatch::types::{
    DispatchError, DispatchResult, NetworkTarget, SubmissionResult, TransactionId,
};
use stacks_dispatch::{DispatchConfig, Dispatcher, LedgerClient, Principal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CONTRACT_ADDRESS: &str = "SP2PEBKJ2W1ZDDF2QQ6Y4FXKZEDPT9J9R2NKD9WJB";
const TOKEN_CONTRACT: &str = "sentinel-token";
const TOKEN_DECIMALS: u8 = 6;

// Throwaway demo key; never commit real key material.
const SENDER_KEY: &str = "0000000000000000000000000000000000000000000000000000000000000001";

/// Stub ledger with canned balances and an accepting submission path.
struct StubLedger;

impl LedgerClient for StubLedger {
    async fn sign_and_submit(
        &self,
        request: &OperationRequest,
        network: &NetworkTarget,
    ) -> SubmissionResult {
        tracing::debug!(
            operation = request.operation().kind_name(),
            target = %request.operation().target(),
            network = %network,
            "stub ledger signing and broadcasting"
        );
        let txid = TransactionId::new("0x7a11ad9c3301").expect("stub txid is non-empty");
        SubmissionResult::success(txid)
    }

    async fn call_read_only(
        &self,
        call: &ReadOnlyCall,
        _network: &NetworkTarget,
    ) -> DispatchResult<DecodedValue> {
        match call.function() {
            "get-balance" => Ok(DecodedValue::new(json!({
                "success": true,
                "value": {"type": "uint", "value": "2500000"}
            }))),
            "get-total-supply" => Ok(DecodedValue::new(json!({
                "type": "uint", "value": "21000000000000"
            }))),
            other => Err(DispatchError::QueryFailed(format!(
                "stub ledger has no data for {}",
                other
            ))),
        }
    }
}

async fn get_balance<C: LedgerClient>(
    dispatcher: &Dispatcher<C>,
    contract: &ContractId,
    owner: Principal,
) -> Result<u128, Box<dyn std::error::Error>> {
    let call = ReadOnlyCall::new(contract.clone(), "get-balance", CONTRACT_ADDRESS.parse()?)?
        .arg(ClarityValue::principal(owner));
    Ok(dispatcher.query_uint(&call).await?)
}

async fn get_total_supply<C: LedgerClient>(
    dispatcher: &Dispatcher<C>,
    contract: &ContractId,
) -> Result<u128, Box<dyn std::error::Error>> {
    let call = ReadOnlyCall::new(contract.clone(), "get-total-supply", CONTRACT_ADDRESS.parse()?)?;
    Ok(dispatcher.query_uint(&call).await?)
}

async fn transfer_tokens<C: LedgerClient>(
    dispatcher: &Dispatcher<C>,
    token: &AssetId,
    fee: u64,
    amount: u128,
    recipient: Principal,
    memo: Option<&str>,
) -> Result<TransactionId, Box<dyn std::error::Error>> {
    let mut builder = RequestBuilder::transfer(
        token.clone(),
        amount,
        CONTRACT_ADDRESS.parse()?,
        recipient,
    )
    .fee(fee)
    .signer(SigningKey::from_hex(SENDER_KEY)?)
    .guard(AssetGuard::exact(token.clone(), amount));

    if let Some(memo) = memo {
        builder = builder.memo(memo);
    }

    let txid = dispatcher.submit(&builder.build()?).await?;
    tracing::info!(txid = %txid, "transfer accepted");
    Ok(txid)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stacks_dispatch=debug,token_operations=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DispatchConfig::default();
    let contract: ContractId = format!("{}.{}", CONTRACT_ADDRESS, TOKEN_CONTRACT).parse()?;
    let token = AssetId::new(contract.clone(), TOKEN_CONTRACT)?;
    let dispatcher = Dispatcher::new(StubLedger, NetworkTarget::Mainnet);

    let balance = get_balance(&dispatcher, &contract, CONTRACT_ADDRESS.parse()?).await?;
    tracing::info!(
        balance = %units::format_token_amount(balance, TOKEN_DECIMALS),
        "SNTL balance"
    );

    let supply = get_total_supply(&dispatcher, &contract).await?;
    tracing::info!(
        supply = %units::format_token_amount(supply, TOKEN_DECIMALS),
        "SNTL total supply"
    );

    transfer_tokens(
        &dispatcher,
        &token,
        config.fees.transfer_microstx,
        1_000_000, // 1 SNTL
        "SP3FBR2AGK5H9QBDH3EB05J2F4CHCH82G".parse()?,
        Some("Payment for services"),
    )
    .await?;

    Ok(())
}
