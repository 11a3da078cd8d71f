//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML config
//! files. Signing keys are deliberately absent: key material comes from the
//! environment only, never from configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::resilience::RetryPolicy;
use crate::types::NetworkTarget;

/// Root configuration for the dispatch pipeline.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DispatchConfig {
    /// Ledger network endpoints.
    pub network: NetworkConfig,

    /// Default fees per operation kind.
    pub fees: FeeConfig,

    /// Submission behavior (timeout, retries).
    pub submission: SubmissionConfig,
}

/// Ledger network endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Target environment ("mainnet" or "testnet").
    pub target: String,

    /// Node RPC endpoint.
    pub node_url: String,

    /// Fallback endpoints, tried in order by the ledger client.
    pub failover_urls: Vec<String>,
}

impl NetworkConfig {
    /// The parsed network target, if the configured string is known.
    pub fn network_target(&self) -> Option<NetworkTarget> {
        NetworkTarget::parse(&self.target)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            target: "testnet".to_string(),
            node_url: "https://api.testnet.hiro.so".to_string(),
            failover_urls: Vec::new(),
        }
    }
}

/// Default fees per operation kind, in microSTX.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeeConfig {
    pub deploy_microstx: u64,
    pub call_microstx: u64,
    pub transfer_microstx: u64,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            deploy_microstx: 50_000,
            call_microstx: 50_000,
            transfer_microstx: 30_000,
        }
    }
}

/// Submission behavior.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Abort a submission attempt after this many seconds. Zero means wait
    /// for the ledger client indefinitely.
    pub timeout_secs: u64,

    /// Retry settings applied to rejected submissions.
    pub retries: RetryConfig,
}

impl SubmissionConfig {
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    pub enabled: bool,
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl RetryConfig {
    /// The policy the dispatcher should run with.
    pub fn to_policy(&self) -> RetryPolicy {
        if self.enabled {
            RetryPolicy::exponential(self.max_attempts, self.base_delay_ms, self.max_delay_ms)
        } else {
            RetryPolicy::none()
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_attempts: 3,
            base_delay_ms: 100,
            max_delay_ms: 2_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DispatchConfig::default();
        assert_eq!(config.network.target, "testnet");
        assert_eq!(config.network.network_target(), Some(NetworkTarget::Testnet));
        assert_eq!(config.fees.deploy_microstx, 50_000);
        assert_eq!(config.fees.transfer_microstx, 30_000);
        assert_eq!(config.submission.timeout(), None);
        assert!(!config.submission.retries.enabled);
    }

    #[test]
    fn test_retry_config_to_policy() {
        let mut retries = RetryConfig::default();
        assert_eq!(retries.to_policy(), RetryPolicy::none());

        retries.enabled = true;
        retries.max_attempts = 5;
        assert_eq!(retries.to_policy().max_attempts(), 5);
    }

    #[test]
    fn test_timeout_zero_means_unbounded() {
        let submission = SubmissionConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(submission.timeout(), None);

        let submission = SubmissionConfig {
            timeout_secs: 30,
            ..Default::default()
        };
        assert_eq!(submission.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_minimal_toml_parses_with_defaults() {
        let config: DispatchConfig = toml::from_str(
            r#"
            [network]
            target = "mainnet"
            node_url = "https://api.hiro.so"
            "#,
        )
        .unwrap();

        assert_eq!(config.network.network_target(), Some(NetworkTarget::Mainnet));
        assert_eq!(config.fees.call_microstx, 50_000);
    }
}
