//! Asset guards: caller-specified bounds on what a transaction may move.

use std::fmt;
use std::str::FromStr;

use crate::clarity::principal::{validate_token_name, ContractId};
use crate::types::{DispatchError, DispatchResult};

/// Comparison applied to the amount an asset guard allows to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Equal,
    Greater,
    Less,
}

impl Comparator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::Greater => ">",
            Self::Less => "<",
        }
    }
}

/// Fully-qualified fungible asset: issuing contract plus token name,
/// rendered `ADDRESS.contract::token`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId {
    contract: ContractId,
    token: String,
}

impl AssetId {
    pub fn new(contract: ContractId, token: impl Into<String>) -> DispatchResult<Self> {
        let token = token.into();
        validate_token_name(&token)?;
        Ok(Self { contract, token })
    }

    pub fn contract(&self) -> &ContractId {
        &self.contract
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.contract, self.token)
    }
}

impl FromStr for AssetId {
    type Err = DispatchError;

    fn from_str(s: &str) -> DispatchResult<Self> {
        let (contract, token) = s.split_once("::").ok_or_else(|| {
            DispatchError::InvalidRequest(format!(
                "asset id {:?} must be ADDRESS.contract::token",
                s
            ))
        })?;
        Self::new(contract.parse()?, token)
    }
}

/// Safety constraint asserting exactly what asset movement a transaction
/// may cause. Attached at construction, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetGuard {
    asset: AssetId,
    comparator: Comparator,
    amount: u128,
}

impl AssetGuard {
    pub fn new(asset: AssetId, comparator: Comparator, amount: u128) -> Self {
        Self {
            asset,
            comparator,
            amount,
        }
    }

    /// Guard requiring the moved amount to equal `amount` exactly, the
    /// usual protection for a token transfer.
    pub fn exact(asset: AssetId, amount: u128) -> Self {
        Self::new(asset, Comparator::Equal, amount)
    }

    pub fn asset(&self) -> &AssetId {
        &self.asset
    }

    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    pub fn amount(&self) -> u128 {
        self.amount
    }

    pub(crate) fn matches_asset(&self, asset: &AssetId) -> bool {
        self.asset == *asset
    }
}

impl fmt::Display for AssetGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.asset, self.comparator.symbol(), self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASSET: &str = "SP2PEBKJ2W1ZDDF2QQ6Y4FXKZEDPT9J9R2NKD9WJB.sentinel-token::sentinel-token";

    #[test]
    fn test_asset_id_roundtrip() {
        let asset: AssetId = ASSET.parse().unwrap();
        assert_eq!(asset.token(), "sentinel-token");
        assert_eq!(asset.contract().name(), "sentinel-token");
        assert_eq!(asset.to_string(), ASSET);
    }

    #[test]
    fn test_asset_id_rejects_malformed() {
        assert!("SP2PEBKJ2W1ZDDF2QQ6Y4FXKZEDPT9J9R2NKD9WJB.sentinel-token"
            .parse::<AssetId>()
            .is_err());
        assert!("not-an-address.token::token".parse::<AssetId>().is_err());
        assert!(
            "SP2PEBKJ2W1ZDDF2QQ6Y4FXKZEDPT9J9R2NKD9WJB.sentinel-token::"
                .parse::<AssetId>()
                .is_err()
        );
    }

    #[test]
    fn test_guard_display() {
        let guard = AssetGuard::exact(ASSET.parse().unwrap(), 1_000_000);
        assert_eq!(guard.to_string(), format!("{} == 1000000", ASSET));
        assert_eq!(guard.comparator(), Comparator::Equal);
    }

    #[test]
    fn test_guard_asset_matching() {
        let guard = AssetGuard::exact(ASSET.parse().unwrap(), 5);
        let other: AssetId = "SP2PEBKJ2W1ZDDF2QQ6Y4FXKZEDPT9J9R2NKD9WJB.other::other"
            .parse()
            .unwrap();
        assert!(guard.matches_asset(&ASSET.parse().unwrap()));
        assert!(!guard.matches_asset(&other));
    }
}
