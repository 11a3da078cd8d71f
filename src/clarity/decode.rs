//! Decoded read-only call results.
//!
//! The external ledger client hands back results already decoded to JSON
//! (its cv-to-JSON form). `DecodedValue` wraps that JSON and provides the
//! typed extractors the query path needs: response-envelope unwrapping and
//! unsigned-integer parsing.

use serde_json::Value;

use crate::types::{DispatchError, DispatchResult};

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedValue(Value);

impl DecodedValue {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }

    pub fn into_json(self) -> Value {
        self.0
    }

    /// Unwrap a `(response ...)` envelope of the form
    /// `{"success": true, "value": ...}`.
    ///
    /// Values without a `success` field pass through unchanged. An `err`
    /// response becomes `QueryFailed` carrying the error payload.
    pub fn unwrap_response(&self) -> DispatchResult<DecodedValue> {
        match self.0.get("success") {
            None => Ok(self.clone()),
            Some(Value::Bool(true)) => self
                .0
                .get("value")
                .cloned()
                .map(DecodedValue::new)
                .ok_or_else(|| {
                    DispatchError::QueryFailed(
                        "response envelope is missing its value".to_string(),
                    )
                }),
            Some(Value::Bool(false)) => {
                let payload = self.0.get("value").cloned().unwrap_or(Value::Null);
                Err(DispatchError::QueryFailed(format!(
                    "contract returned err: {}",
                    payload
                )))
            }
            Some(other) => Err(DispatchError::QueryFailed(format!(
                "response envelope has non-boolean success field: {}",
                other
            ))),
        }
    }

    /// Extract an unsigned integer.
    ///
    /// Accepts the typed form `{"type": "uint", "value": "1000000"}` as well
    /// as bare numeric strings and numbers; response envelopes are unwrapped
    /// first. Sign-prefixed and fractional input is rejected, so a supply or
    /// balance can never decode to a negative value.
    pub fn as_uint(&self) -> DispatchResult<u128> {
        let inner = self.unwrap_response()?;
        let raw = match inner.as_json() {
            Value::Object(map) => map.get("value").ok_or_else(|| {
                DispatchError::QueryFailed(format!(
                    "decoded object has no value field: {}",
                    inner.as_json()
                ))
            })?,
            other => other,
        };

        match raw {
            Value::String(s) => s.trim().parse::<u128>().map_err(|_| {
                DispatchError::QueryFailed(format!("not an unsigned integer: {:?}", s))
            }),
            Value::Number(n) => n.as_u64().map(u128::from).ok_or_else(|| {
                DispatchError::QueryFailed(format!("not an unsigned integer: {}", n))
            }),
            other => Err(DispatchError::QueryFailed(format!(
                "expected an unsigned integer, got {}",
                other
            ))),
        }
    }
}

impl From<Value> for DecodedValue {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
