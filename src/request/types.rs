//! Request value types.
//!
//! # Security Constraints
//! - Signing key material is loaded from an environment variable or passed
//!   in explicitly; it is redacted from Debug output and never logged
//! - An `OperationRequest` is immutable once built and carries no network
//!   handles; submission is the pipeline's job

use std::fmt;

use crate::clarity::principal::ContractId;
use crate::clarity::ClarityValue;
use crate::request::guard::{AssetGuard, AssetId};
use crate::types::{DispatchError, DispatchResult};

/// Environment variable the signing key is loaded from.
pub const SIGNING_KEY_ENV_VAR: &str = "STACKS_DISPATCH_SIGNING_KEY";

/// The ledger action a request describes, with its kind-specific target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Publish a new contract under the sender's address.
    Deploy {
        contract_name: String,
        source: String,
    },
    /// Invoke a public function on a deployed contract.
    Call {
        contract: ContractId,
        function: String,
    },
    /// SIP-010 token transfer, a specialized call to the token contract's
    /// `transfer` function.
    Transfer { token: AssetId },
}

impl Operation {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Deploy { .. } => "deploy",
            Self::Call { .. } => "call",
            Self::Transfer { .. } => "transfer",
        }
    }

    /// The function the operation invokes, when it invokes one.
    pub fn function_name(&self) -> Option<&str> {
        match self {
            Self::Deploy { .. } => None,
            Self::Call { function, .. } => Some(function),
            Self::Transfer { .. } => Some("transfer"),
        }
    }

    /// Human-readable target for logs.
    pub fn target(&self) -> String {
        match self {
            Self::Deploy { contract_name, .. } => contract_name.clone(),
            Self::Call { contract, function } => format!("{}.{}", contract, function),
            Self::Transfer { token } => token.to_string(),
        }
    }
}

/// Whether the ledger may move assets beyond what the attached guards
/// declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyMode {
    Allow,
    Deny,
}

/// Anchoring preference for the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorMode {
    OnChainOnly,
    OffChainOnly,
    #[default]
    Any,
}

/// Reference to the key that signs a submission.
///
/// Holds the hex-encoded material for the ledger client; Debug output is
/// redacted.
#[derive(Clone)]
pub struct SigningKey(String);

impl SigningKey {
    /// Accepts 32-byte hex keys with or without a `0x` prefix, optionally
    /// followed by the `01` compression flag byte.
    pub fn from_hex(key: &str) -> DispatchResult<Self> {
        let key = key.strip_prefix("0x").unwrap_or(key);
        if key.len() != 64 && key.len() != 66 {
            return Err(DispatchError::InvalidRequest(format!(
                "signing key has invalid length {}",
                key.len()
            )));
        }
        if !key.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DispatchError::InvalidRequest(
                "signing key is not hex-encoded".to_string(),
            ));
        }
        Ok(Self(key.to_string()))
    }

    /// Load the key from [`SIGNING_KEY_ENV_VAR`].
    pub fn from_env() -> DispatchResult<Self> {
        let key = std::env::var(SIGNING_KEY_ENV_VAR).map_err(|_| {
            DispatchError::InvalidRequest(format!(
                "environment variable {} not set",
                SIGNING_KEY_ENV_VAR
            ))
        })?;
        Self::from_hex(&key)
    }

    /// Hand the raw material to a ledger client. Not used anywhere else.
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(<redacted>)")
    }
}

/// Immutable description of one intended ledger action.
///
/// Built exclusively by [`RequestBuilder`](crate::request::RequestBuilder);
/// construction performs all local validation and no I/O.
#[derive(Debug, Clone)]
pub struct OperationRequest {
    pub(crate) operation: Operation,
    pub(crate) args: Vec<ClarityValue>,
    pub(crate) fee: u64,
    pub(crate) signer: SigningKey,
    pub(crate) safety_mode: SafetyMode,
    pub(crate) anchor_mode: AnchorMode,
    pub(crate) guard: Option<AssetGuard>,
}

impl OperationRequest {
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn args(&self) -> &[ClarityValue] {
        &self.args
    }

    pub fn fee(&self) -> u64 {
        self.fee
    }

    pub fn signer(&self) -> &SigningKey {
        &self.signer
    }

    pub fn safety_mode(&self) -> SafetyMode {
        self.safety_mode
    }

    pub fn anchor_mode(&self) -> AnchorMode {
        self.anchor_mode
    }

    pub fn guard(&self) -> Option<&AssetGuard> {
        self.guard.as_ref()
    }
}
