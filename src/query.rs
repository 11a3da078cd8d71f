//! Read-only ledger queries.
//!
//! A read-only call inspects contract state without a signature, fee, or
//! broadcast. The call value is structurally incapable of carrying a
//! signing key, so the no-side-effects property holds by construction.

use crate::clarity::principal::{validate_function_name, ContractId, Principal};
use crate::clarity::ClarityValue;
use crate::types::DispatchResult;

/// A non-mutating function call against a deployed contract.
///
/// The sender is nominal; any valid principal is accepted since no state
/// changes.
#[derive(Debug, Clone)]
pub struct ReadOnlyCall {
    contract: ContractId,
    function: String,
    args: Vec<ClarityValue>,
    sender: Principal,
}

impl ReadOnlyCall {
    pub fn new(
        contract: ContractId,
        function: impl Into<String>,
        sender: Principal,
    ) -> DispatchResult<Self> {
        let function = function.into();
        validate_function_name(&function)?;
        Ok(Self {
            contract,
            function,
            args: Vec::new(),
            sender,
        })
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

    pub fn contract(&self) -> &ContractId {
        &self.contract
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn arguments(&self) -> &[ClarityValue] {
        &self.args
    }

    pub fn sender(&self) -> &Principal {
        &self.sender
    }
}
