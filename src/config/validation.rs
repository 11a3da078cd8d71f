//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate endpoint URLs and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the parsed config
//! - Runs before a config is accepted into the system

use std::fmt;

use url::Url;

use crate::config::schema::DispatchConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a parsed config for semantic problems.
pub fn validate_config(config: &DispatchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.network.network_target().is_none() {
        errors.push(ValidationError::new(
            "network.target",
            format!(
                "unknown target {:?} (expected \"mainnet\" or \"testnet\")",
                config.network.target
            ),
        ));
    }

    if let Err(e) = config.network.node_url.parse::<Url>() {
        errors.push(ValidationError::new(
            "network.node_url",
            format!("invalid URL {:?}: {}", config.network.node_url, e),
        ));
    }

    for (i, raw) in config.network.failover_urls.iter().enumerate() {
        if raw.parse::<Url>().is_err() {
            errors.push(ValidationError::new(
                &format!("network.failover_urls[{}]", i),
                format!("invalid URL {:?}", raw),
            ));
        }
    }

    let retries = &config.submission.retries;
    if retries.enabled {
        if retries.max_attempts == 0 {
            errors.push(ValidationError::new(
                "submission.retries.max_attempts",
                "must be at least 1",
            ));
        }
        if retries.base_delay_ms > retries.max_delay_ms {
            errors.push(ValidationError::new(
                "submission.retries.base_delay_ms",
                "must not exceed max_delay_ms",
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
