//! Typed Clarity argument values.
//!
//! A closed sum type with one constructor per argument kind the ledger
//! understands. Wire encoding belongs to the external ledger client; values
//! here only carry validated data and render the Clarity source
//! representation for logging.

use std::fmt;

use crate::clarity::principal::Principal;
use crate::types::{DispatchError, DispatchResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClarityValue {
    /// Unsigned 128-bit integer, rendered `u123`.
    Uint(u128),
    /// ASCII string, rendered `"hello"`.
    Ascii(String),
    /// UTF-8 string, rendered `u"hello"`.
    Utf8(String),
    /// Standard or contract principal, rendered `'SP...`.
    Principal(Principal),
    /// Wrapped optional, rendered `(some v)`.
    OptionalSome(Box<ClarityValue>),
    /// Missing optional, rendered `none`.
    OptionalNone,
}

impl ClarityValue {
    pub fn uint(value: u128) -> Self {
        Self::Uint(value)
    }

    /// ASCII string value. Rejects non-ASCII input up front so the request
    /// fails at construction instead of at the encoding step.
    pub fn ascii(value: impl Into<String>) -> DispatchResult<Self> {
        let value = value.into();
        if !value.is_ascii() {
            return Err(DispatchError::InvalidRequest(format!(
                "string-ascii argument {:?} contains non-ASCII characters",
                value
            )));
        }
        Ok(Self::Ascii(value))
    }

    pub fn utf8(value: impl Into<String>) -> Self {
        Self::Utf8(value.into())
    }

    pub fn principal(principal: Principal) -> Self {
        Self::Principal(principal)
    }

    pub fn some(value: ClarityValue) -> Self {
        Self::OptionalSome(Box::new(value))
    }

    pub fn none() -> Self {
        Self::OptionalNone
    }

    /// Wrap an optional UTF-8 memo the way a transfer argument list expects
    /// it: `(some u"...")` when present, `none` otherwise.
    pub fn optional_utf8(value: Option<&str>) -> Self {
        match value {
            Some(memo) => Self::some(Self::utf8(memo)),
            None => Self::OptionalNone,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Uint(_) => "uint",
            Self::Ascii(_) => "string-ascii",
            Self::Utf8(_) => "string-utf8",
            Self::Principal(_) => "principal",
            Self::OptionalSome(_) => "optional",
            Self::OptionalNone => "optional",
        }
    }
}

impl fmt::Display for ClarityValue {
    /// Clarity source representation, used in request logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uint(n) => write!(f, "u{}", n),
            Self::Ascii(s) => write!(f, "\"{}\"", s),
            Self::Utf8(s) => write!(f, "u\"{}\"", s),
            Self::Principal(p) => write!(f, "'{}", p),
            Self::OptionalSome(v) => write!(f, "(some {})", v),
            Self::OptionalNone => f.write_str("none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_rejects_non_ascii() {
        assert!(ClarityValue::ascii("Increase Treasury").is_ok());
        assert!(ClarityValue::ascii("trésorerie").is_err());
    }

    #[test]
    fn test_memo_wrapping() {
        assert_eq!(
            ClarityValue::optional_utf8(Some("Payment for services")),
            ClarityValue::some(ClarityValue::utf8("Payment for services"))
        );
        assert_eq!(ClarityValue::optional_utf8(None), ClarityValue::none());
    }

    #[test]
    fn test_display_repr() {
        assert_eq!(ClarityValue::uint(1_000_000).to_string(), "u1000000");
        assert_eq!(ClarityValue::ascii("yes").unwrap().to_string(), "\"yes\"");
        assert_eq!(ClarityValue::utf8("memo").to_string(), "u\"memo\"");
        assert_eq!(
            ClarityValue::some(ClarityValue::uint(5)).to_string(),
            "(some u5)"
        );
        assert_eq!(ClarityValue::none().to_string(), "none");

        let p: Principal = "SP2PEBKJ2W1ZDDF2QQ6Y4FXKZEDPT9J9R2NKD9WJB"
            .parse()
            .unwrap();
        assert_eq!(
            ClarityValue::principal(p).to_string(),
            "'SP2PEBKJ2W1ZDDF2QQ6Y4FXKZEDPT9J9R2NKD9WJB"
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ClarityValue::uint(0).type_name(), "uint");
        assert_eq!(ClarityValue::none().type_name(), "optional");
        assert_eq!(
            ClarityValue::some(ClarityValue::uint(1)).type_name(),
            "optional"
        );
    }
}
