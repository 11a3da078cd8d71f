//! Core types and error definitions shared across the dispatch pipeline.

use thiserror::Error;

/// Ledger environment selector.
///
/// Every submission and query takes the target explicitly; there is no
/// ambient default and no global network state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkTarget {
    Mainnet,
    Testnet,
}

impl NetworkTarget {
    /// Parse a config-file string ("mainnet" / "testnet").
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mainnet" => Some(Self::Mainnet),
            "testnet" => Some(Self::Testnet),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl std::fmt::Display for NetworkTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier the ledger assigns to an accepted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionId(String);

impl TransactionId {
    /// Wrap a ledger-assigned identifier.
    ///
    /// Empty identifiers are rejected so an accepted submission always
    /// names its transaction.
    pub fn new(id: impl Into<String>) -> DispatchResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DispatchError::SubmissionFailed {
                message: "ledger returned an empty transaction id".to_string(),
            });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of submitting one request to the ledger.
///
/// Submission is atomic: either the ledger accepted the encoded transaction
/// or it was rejected before any state change. There is no partial-success
/// variant.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    /// The ledger accepted the transaction.
    Success { txid: TransactionId },
    /// The ledger (or the transport to it) rejected the request.
    Failure { message: String },
}

impl SubmissionResult {
    pub fn success(txid: TransactionId) -> Self {
        Self::Success { txid }
    }

    /// Build a failure outcome. Blank messages are replaced so a rejection
    /// is never silent.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "ledger rejected the transaction without a reason".to_string()
        } else {
            message
        };
        Self::Failure { message }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Lifecycle of a request inside the pipeline.
///
/// `Built → Submitted → {Confirmed | Rejected}`, logged at each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationState {
    Built,
    Submitted,
    Confirmed,
    Rejected,
}

impl OperationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Built => "built",
            Self::Submitted => "submitted",
            Self::Confirmed => "confirmed",
            Self::Rejected => "rejected",
        }
    }
}

/// Errors surfaced by the dispatch pipeline.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Local validation failure. The request never reached the network.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The ledger rejected the submission; carries the ledger's message.
    #[error("submission failed: {message}")]
    SubmissionFailed { message: String },

    /// Read-only call or result decoding failed.
    #[error("query failed: {0}")]
    QueryFailed(String),
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
