//! Ledger principals and address validation.
//!
//! # Responsibilities
//! - Validate c32 account addresses (syntactic checks only; the checksum
//!   belongs to the external ledger library)
//! - Parse and render contract coordinates (`ADDRESS.contract-name`)
//! - Enforce the naming rules shared by contract and function names

use std::fmt;
use std::str::FromStr;

use crate::types::{DispatchError, DispatchResult};

/// c32 alphabet used by ledger addresses. No I, L, O, or U.
const C32_ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Observed address lengths for single-sig and multi-sig principals.
const ADDRESS_MIN_LEN: usize = 28;
const ADDRESS_MAX_LEN: usize = 41;

const NAME_MAX_LEN: usize = 128;

/// Validated c32 account address, e.g. `SP2PEBKJ2W1ZDDF2QQ6Y4FXKZEDPT9J9R2NKD9WJB`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> DispatchResult<Self> {
        let address = address.into();
        if address.len() < ADDRESS_MIN_LEN || address.len() > ADDRESS_MAX_LEN {
            return Err(DispatchError::InvalidRequest(format!(
                "address {:?} has invalid length {}",
                address,
                address.len()
            )));
        }

        let mut chars = address.chars();
        if chars.next() != Some('S') {
            return Err(DispatchError::InvalidRequest(format!(
                "address {:?} must start with 'S'",
                address
            )));
        }
        match chars.next() {
            Some('P') | Some('T') | Some('M') | Some('N') => {}
            _ => {
                return Err(DispatchError::InvalidRequest(format!(
                    "address {:?} has an unknown version prefix",
                    address
                )))
            }
        }
        if let Some(c) = address[2..].chars().find(|c| !C32_ALPHABET.contains(*c)) {
            return Err(DispatchError::InvalidRequest(format!(
                "address {:?} contains non-c32 character {:?}",
                address, c
            )));
        }

        Ok(Self(address))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the version prefix belongs to the main network (SP/SM).
    pub fn is_mainnet(&self) -> bool {
        matches!(self.0.as_bytes().get(1), Some(b'P') | Some(b'M'))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = DispatchError;

    fn from_str(s: &str) -> DispatchResult<Self> {
        Self::new(s)
    }
}

/// Coordinates of a deployed contract: issuer address plus contract name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractId {
    address: Address,
    name: String,
}

impl ContractId {
    pub fn new(address: Address, name: impl Into<String>) -> DispatchResult<Self> {
        let name = name.into();
        validate_contract_name(&name)?;
        Ok(Self { address, name })
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.address, self.name)
    }
}

impl FromStr for ContractId {
    type Err = DispatchError;

    /// Parse `ADDRESS.contract-name`.
    fn from_str(s: &str) -> DispatchResult<Self> {
        let (address, name) = s.split_once('.').ok_or_else(|| {
            DispatchError::InvalidRequest(format!(
                "contract id {:?} must be ADDRESS.contract-name",
                s
            ))
        })?;
        Self::new(Address::new(address)?, name)
    }
}

/// A standard (account) or contract principal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Principal {
    Standard(Address),
    Contract(ContractId),
}

impl Principal {
    pub fn standard(address: impl Into<String>) -> DispatchResult<Self> {
        Ok(Self::Standard(Address::new(address)?))
    }

    pub fn contract(id: ContractId) -> Self {
        Self::Contract(id)
    }

    pub fn address(&self) -> &Address {
        match self {
            Self::Standard(address) => address,
            Self::Contract(id) => id.address(),
        }
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard(address) => address.fmt(f),
            Self::Contract(id) => id.fmt(f),
        }
    }
}

impl FromStr for Principal {
    type Err = DispatchError;

    fn from_str(s: &str) -> DispatchResult<Self> {
        if s.contains('.') {
            Ok(Self::Contract(s.parse()?))
        } else {
            Self::standard(s)
        }
    }
}

/// Shared naming rule: leading ASCII letter, then letters, digits, `-`, `_`
/// (function names additionally allow `!` and `?`).
fn validate_name(what: &str, name: &str, allow_marks: bool) -> DispatchResult<()> {
    if name.is_empty() {
        return Err(DispatchError::InvalidRequest(format!(
            "{} must not be empty",
            what
        )));
    }
    if name.len() > NAME_MAX_LEN {
        return Err(DispatchError::InvalidRequest(format!(
            "{} {:?} exceeds {} characters",
            what, name, NAME_MAX_LEN
        )));
    }
    match name.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => {
            return Err(DispatchError::InvalidRequest(format!(
                "{} {:?} must start with a letter",
                what, name
            )))
        }
    }
    let valid = |c: char| {
        c.is_ascii_alphanumeric() || c == '-' || c == '_' || (allow_marks && (c == '!' || c == '?'))
    };
    if let Some(c) = name.chars().find(|c| !valid(*c)) {
        return Err(DispatchError::InvalidRequest(format!(
            "{} {:?} contains invalid character {:?}",
            what, name, c
        )));
    }
    Ok(())
}

pub(crate) fn validate_contract_name(name: &str) -> DispatchResult<()> {
    validate_name("contract name", name, false)
}

pub(crate) fn validate_function_name(name: &str) -> DispatchResult<()> {
    validate_name("function name", name, true)
}

pub(crate) fn validate_token_name(name: &str) -> DispatchResult<()> {
    validate_name("token name", name, false)
}
