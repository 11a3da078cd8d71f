//! Submission result interpretation.
//!
//! # Responsibilities
//! - Turn a `SubmissionResult` into the caller-facing outcome
//! - Log accepted transactions with their explorer link
//! - Never swallow a rejection

use crate::types::{
    DispatchError, DispatchResult, NetworkTarget, OperationState, SubmissionResult, TransactionId,
};

const EXPLORER_BASE: &str = "https://explorer.stacks.co/txid";

/// Interpret a submission outcome: the transaction id on success, a
/// `SubmissionFailed` error on rejection.
pub fn report(outcome: SubmissionResult, network: &NetworkTarget) -> DispatchResult<TransactionId> {
    match outcome {
        SubmissionResult::Success { txid } => {
            tracing::info!(
                txid = %txid,
                explorer = %explorer_url(&txid, network),
                state = OperationState::Confirmed.as_str(),
                "transaction accepted"
            );
            Ok(txid)
        }
        SubmissionResult::Failure { message } => {
            tracing::error!(
                error = %message,
                state = OperationState::Rejected.as_str(),
                "submission rejected"
            );
            Err(DispatchError::SubmissionFailed { message })
        }
    }
}

/// Explorer link for a transaction id on the given network.
pub fn explorer_url(txid: &TransactionId, network: &NetworkTarget) -> String {
    match network {
        NetworkTarget::Mainnet => format!("{}/{}", EXPLORER_BASE, txid),
        NetworkTarget::Testnet => format!("{}/{}?chain=testnet", EXPLORER_BASE, txid),
    }
}
