//! End-to-end pipeline tests against the programmable mock ledger.

use std::time::Duration;

use serde_json::json;

use stacks_dispatch::clarity::ClarityValue;
use stacks_dispatch::query::ReadOnlyCall;
use stacks_dispatch::request::{AssetGuard, AssetId, RequestBuilder, SigningKey};
use stacks_dispatch::types::{DispatchError, NetworkTarget, SubmissionResult, TransactionId};
use stacks_dispatch::{ContractId, Dispatcher, RetryPolicy};

mod common;
use common::MockLedger;

const TEST_KEY: &str = "0000000000000000000000000000000000000000000000000000000000000001";
const CONTRACT_ADDRESS: &str = "SP2PEBKJ2W1ZDDF2QQ6Y4FXKZEDPT9J9R2NKD9WJB";
const RECIPIENT: &str = "SP3FBR2AGK5H9QBDH3EB05J2F4CHCH82G";

fn key() -> SigningKey {
    SigningKey::from_hex(TEST_KEY).unwrap()
}

fn token() -> AssetId {
    format!("{}.sentinel-token::sentinel-token", CONTRACT_ADDRESS)
        .parse()
        .unwrap()
}

fn accepted(txid: &str) -> SubmissionResult {
    SubmissionResult::success(TransactionId::new(txid).unwrap())
}

#[tokio::test]
async fn transfer_with_matching_guard_is_accepted() {
    let ledger = MockLedger::new();
    ledger.push_outcome(accepted("0x9f1e66ad"));
    let dispatcher = Dispatcher::new(ledger.clone(), NetworkTarget::Mainnet);

    let request = RequestBuilder::transfer(
        token(),
        1_000_000,
        CONTRACT_ADDRESS.parse().unwrap(),
        RECIPIENT.parse().unwrap(),
    )
    .fee(30_000)
    .signer(key())
    .guard(AssetGuard::exact(token(), 1_000_000))
    .build()
    .unwrap();

    let txid = dispatcher.submit(&request).await.unwrap();
    assert!(!txid.as_str().is_empty());
    assert_eq!(ledger.submission_count(), 1);

    // The client saw the canonical four-argument transfer
    let seen = ledger.submitted_requests();
    assert_eq!(seen[0].args().len(), 4);
    assert_eq!(seen[0].args()[0], ClarityValue::uint(1_000_000));
    assert_eq!(seen[0].operation().kind_name(), "transfer");
}

#[tokio::test]
async fn rejected_submission_surfaces_ledger_message() {
    let ledger = MockLedger::new();
    ledger.push_outcome(SubmissionResult::failure("NotEnoughFunds"));
    let dispatcher = Dispatcher::new(ledger.clone(), NetworkTarget::Testnet);

    let request = RequestBuilder::deploy("my-counter", ";; counter contract")
        .fee(50_000)
        .signer(key())
        .build()
        .unwrap();

    let err = dispatcher.submit(&request).await.unwrap_err();
    match err {
        DispatchError::SubmissionFailed { message } => assert_eq!(message, "NotEnoughFunds"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(ledger.submission_count(), 1);
}

#[tokio::test]
async fn retry_policy_drives_reattempts() {
    let ledger = MockLedger::new();
    ledger.push_outcome(SubmissionResult::failure("ConflictingNonceInMempool"));
    ledger.push_outcome(SubmissionResult::failure("ConflictingNonceInMempool"));
    ledger.push_outcome(accepted("0x51c0"));

    let dispatcher = Dispatcher::new(ledger.clone(), NetworkTarget::Testnet)
        .with_retry_policy(RetryPolicy::exponential(3, 1, 5));

    let request = RequestBuilder::call(
        format!("{}.voting", CONTRACT_ADDRESS).parse::<ContractId>().unwrap(),
        "vote",
    )
    .arg(ClarityValue::uint(0))
    .arg(ClarityValue::uint(0))
    .arg(ClarityValue::uint(100))
    .fee(30_000)
    .signer(key())
    .build()
    .unwrap();

    let txid = dispatcher.submit(&request).await.unwrap();
    assert_eq!(txid.as_str(), "0x51c0");
    assert_eq!(ledger.submission_count(), 3, "should have attempted 3 times");
}

#[tokio::test]
async fn default_policy_stops_after_one_attempt() {
    let ledger = MockLedger::new();
    ledger.push_outcome(SubmissionResult::failure("BadNonce"));
    ledger.push_outcome(accepted("0xffff"));

    let dispatcher = Dispatcher::new(ledger.clone(), NetworkTarget::Testnet);

    let request = RequestBuilder::deploy("my-counter", ";; counter contract")
        .fee(50_000)
        .signer(key())
        .build()
        .unwrap();

    assert!(dispatcher.submit(&request).await.is_err());
    assert_eq!(ledger.submission_count(), 1);
}

#[tokio::test]
async fn slow_submission_times_out() {
    let ledger = MockLedger::new().with_delay(Duration::from_millis(200));
    ledger.push_outcome(accepted("0xdead"));

    let dispatcher = Dispatcher::new(ledger.clone(), NetworkTarget::Testnet)
        .with_submit_timeout(Duration::from_millis(20));

    let request = RequestBuilder::deploy("my-counter", ";; counter contract")
        .fee(50_000)
        .signer(key())
        .build()
        .unwrap();

    let err = dispatcher.submit(&request).await.unwrap_err();
    assert!(err.to_string().contains("timed out"));
}

#[tokio::test]
async fn read_only_query_performs_no_submission() {
    let ledger = MockLedger::new();
    ledger.set_query_result(
        "get-proposal",
        json!({
            "success": true,
            "value": {
                "title": {"type": "(string-ascii 64)", "value": "Increase Treasury"},
                "votes-for": {"type": "uint", "value": "1200"}
            }
        }),
    );
    let dispatcher = Dispatcher::new(ledger.clone(), NetworkTarget::Mainnet);

    let call = ReadOnlyCall::new(
        format!("{}.voting", CONTRACT_ADDRESS).parse().unwrap(),
        "get-proposal",
        CONTRACT_ADDRESS.parse().unwrap(),
    )
    .unwrap()
    .arg(ClarityValue::uint(0));

    let decoded = dispatcher.query(&call).await.unwrap();
    let proposal = decoded.unwrap_response().unwrap();
    assert_eq!(
        proposal.as_json()["title"]["value"],
        json!("Increase Treasury")
    );

    assert_eq!(ledger.query_count(), 1);
    assert_eq!(ledger.submission_count(), 0);
}

#[tokio::test]
async fn balance_and_supply_decode_as_unsigned() {
    let ledger = MockLedger::new();
    ledger.set_query_result(
        "get-balance",
        json!({"success": true, "value": {"type": "uint", "value": "2500000"}}),
    );
    ledger.set_query_result(
        "get-total-supply",
        json!({"type": "uint", "value": "21000000000000"}),
    );
    let dispatcher = Dispatcher::new(ledger.clone(), NetworkTarget::Mainnet);

    let contract: ContractId = format!("{}.sentinel-token", CONTRACT_ADDRESS).parse().unwrap();

    let balance_call = ReadOnlyCall::new(
        contract.clone(),
        "get-balance",
        CONTRACT_ADDRESS.parse().unwrap(),
    )
    .unwrap()
    .arg(ClarityValue::principal(RECIPIENT.parse().unwrap()));

    let supply_call =
        ReadOnlyCall::new(contract, "get-total-supply", CONTRACT_ADDRESS.parse().unwrap())
            .unwrap();

    assert_eq!(dispatcher.query_uint(&balance_call).await.unwrap(), 2_500_000);
    assert_eq!(
        dispatcher.query_uint(&supply_call).await.unwrap(),
        21_000_000_000_000
    );
}

#[tokio::test]
async fn unscripted_query_fails_cleanly() {
    let ledger = MockLedger::new();
    let dispatcher = Dispatcher::new(ledger, NetworkTarget::Testnet);

    let call = ReadOnlyCall::new(
        format!("{}.voting", CONTRACT_ADDRESS).parse().unwrap(),
        "get-proposal",
        CONTRACT_ADDRESS.parse().unwrap(),
    )
    .unwrap();

    let err = dispatcher.query(&call).await.unwrap_err();
    assert!(matches!(err, DispatchError::QueryFailed(_)));
}
