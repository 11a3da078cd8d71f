//! Request construction and local validation.
//!
//! # Responsibilities
//! - Turn typed caller parameters into an immutable `OperationRequest`
//! - Validate everything that can be checked without the network
//! - Assemble the canonical transfer argument list
//!
//! All failures are [`DispatchError::InvalidRequest`]; building performs no
//! I/O and has no side effects.

use crate::clarity::principal::{validate_contract_name, validate_function_name, ContractId, Principal};
use crate::clarity::ClarityValue;
use crate::request::guard::{AssetGuard, AssetId};
use crate::request::types::{AnchorMode, Operation, OperationRequest, SafetyMode, SigningKey};
use crate::types::{DispatchError, DispatchResult};

/// Consuming builder with one entry point per operation kind.
#[derive(Debug)]
pub struct RequestBuilder {
    pending: Pending,
    args: Vec<ClarityValue>,
    memo: Option<String>,
    fee: u64,
    signer: Option<SigningKey>,
    safety_mode: SafetyMode,
    anchor_mode: AnchorMode,
    guard: Option<AssetGuard>,
}

#[derive(Debug)]
enum Pending {
    Deploy {
        contract_name: String,
        source: String,
    },
    Call {
        contract: ContractId,
        function: String,
    },
    Transfer {
        token: AssetId,
        amount: u128,
        sender: Principal,
        recipient: Principal,
    },
}

impl RequestBuilder {
    /// Deploy a contract under the sender's address.
    ///
    /// Extra asset movement defaults to `Allow`: publishing a contract may
    /// trigger its initializer, whose movements the deployer cannot
    /// enumerate up front.
    pub fn deploy(contract_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(
            Pending::Deploy {
                contract_name: contract_name.into(),
                source: source.into(),
            },
            SafetyMode::Allow,
        )
    }

    /// Call a public function on a deployed contract. Extra asset movement
    /// defaults to `Deny`.
    pub fn call(contract: ContractId, function: impl Into<String>) -> Self {
        Self::new(
            Pending::Call {
                contract,
                function: function.into(),
            },
            SafetyMode::Deny,
        )
    }

    /// Transfer `amount` of a SIP-010 token. The canonical argument list
    /// `[amount, sender, recipient, memo]` is assembled at build time; the
    /// memo stays an `Option<String>` until then.
    pub fn transfer(
        token: AssetId,
        amount: u128,
        sender: Principal,
        recipient: Principal,
    ) -> Self {
        Self::new(
            Pending::Transfer {
                token,
                amount,
                sender,
                recipient,
            },
            SafetyMode::Deny,
        )
    }

    fn new(pending: Pending, safety_mode: SafetyMode) -> Self {
        Self {
            pending,
            args: Vec::new(),
            memo: None,
            fee: 0,
            signer: None,
            safety_mode,
            anchor_mode: AnchorMode::default(),
            guard: None,
        }
    }

    /// Append one function argument. Order is preserved exactly.
    pub fn arg(mut self, value: ClarityValue) -> Self {
        self.args.push(value);
        self
    }

    pub fn args(mut self, values: impl IntoIterator<Item = ClarityValue>) -> Self {
        self.args.extend(values);
        self
    }

    /// Attach a transfer memo.
    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Fee in microSTX. Zero is accepted; the ledger decides whether it
    /// pays for inclusion.
    pub fn fee(mut self, microstx: u64) -> Self {
        self.fee = microstx;
        self
    }

    pub fn signer(mut self, key: SigningKey) -> Self {
        self.signer = Some(key);
        self
    }

    pub fn safety_mode(mut self, mode: SafetyMode) -> Self {
        self.safety_mode = mode;
        self
    }

    pub fn anchor_mode(mut self, mode: AnchorMode) -> Self {
        self.anchor_mode = mode;
        self
    }

    /// Attach an asset guard. Only meaningful on transfers, where it must
    /// reference the asset being moved.
    pub fn guard(mut self, guard: AssetGuard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Validate and freeze the request.
    pub fn build(self) -> DispatchResult<OperationRequest> {
        let signer = self.signer.ok_or_else(|| {
            DispatchError::InvalidRequest("a signing key is required".to_string())
        })?;

        let (operation, args) = match self.pending {
            Pending::Deploy {
                contract_name,
                source,
            } => {
                validate_contract_name(&contract_name)?;
                if source.trim().is_empty() {
                    return Err(DispatchError::InvalidRequest(
                        "contract source must not be empty".to_string(),
                    ));
                }
                if !self.args.is_empty() {
                    return Err(DispatchError::InvalidRequest(
                        "a deploy takes no function arguments".to_string(),
                    ));
                }
                if self.memo.is_some() {
                    return Err(DispatchError::InvalidRequest(
                        "a memo only applies to transfers".to_string(),
                    ));
                }
                if self.guard.is_some() {
                    return Err(DispatchError::InvalidRequest(
                        "an asset guard only applies to transfers".to_string(),
                    ));
                }
                (
                    Operation::Deploy {
                        contract_name,
                        source,
                    },
                    Vec::new(),
                )
            }

            Pending::Call { contract, function } => {
                validate_function_name(&function)?;
                if self.memo.is_some() {
                    return Err(DispatchError::InvalidRequest(
                        "a memo only applies to transfers".to_string(),
                    ));
                }
                if self.guard.is_some() {
                    return Err(DispatchError::InvalidRequest(
                        "an asset guard only applies to transfers".to_string(),
                    ));
                }
                (Operation::Call { contract, function }, self.args)
            }

            Pending::Transfer {
                token,
                amount,
                sender,
                recipient,
            } => {
                if !self.args.is_empty() {
                    return Err(DispatchError::InvalidRequest(
                        "transfer arguments are fixed; use memo() for the optional memo"
                            .to_string(),
                    ));
                }
                if let Some(guard) = &self.guard {
                    if !guard.matches_asset(&token) {
                        return Err(DispatchError::InvalidRequest(format!(
                            "asset guard references {} but the transfer moves {}",
                            guard.asset(),
                            token
                        )));
                    }
                }
                let args = vec![
                    ClarityValue::uint(amount),
                    ClarityValue::principal(sender),
                    ClarityValue::principal(recipient),
                    ClarityValue::optional_utf8(self.memo.as_deref()),
                ];
                (Operation::Transfer { token }, args)
            }
        };

        Ok(OperationRequest {
            operation,
            args,
            fee: self.fee,
            signer,
            safety_mode: self.safety_mode,
            anchor_mode: self.anchor_mode,
            guard: self.guard,
        })
    }
}
