//! Caller-supplied retry policy for submissions.
//!
//! # Design Decisions
//! - The pipeline hardcodes no policy; the default is a single attempt
//! - Jittered exponential backoff prevents thundering herd
//! - Only rejected submissions are retried; a transaction the ledger
//!   already accepted is a duplicate on re-submission and cannot
//!   double-apply

use std::time::Duration;

use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay_ms: u64,
    max_delay_ms: u64,
}

impl RetryPolicy {
    /// Single attempt, no delays. Matches the behavior of submitting
    /// directly through the ledger client.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            base_delay_ms: 0,
            max_delay_ms: 0,
        }
    }

    /// Jittered exponential backoff across `max_attempts` total attempts.
    pub fn exponential(max_attempts: u32, base_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay_ms,
            max_delay_ms,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay to wait before `attempt` (1-based). The first attempt runs
    /// immediately; later ones double the base delay each time, capped and
    /// jittered by up to 10%.
    pub fn delay_before(&self, attempt: u32) -> Duration {
        if attempt <= 1 {
            return Duration::ZERO;
        }

        let exponential_base = 2u64.saturating_pow(attempt - 2);
        let delay_ms = self.base_delay_ms.saturating_mul(exponential_base);
        let capped_delay = delay_ms.min(self.max_delay_ms);

        let jitter_range = capped_delay / 10;
        let jitter = if jitter_range > 0 {
            rand::thread_rng().gen_range(0..jitter_range)
        } else {
            0
        };

        Duration::from_millis(capped_delay + jitter)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}
