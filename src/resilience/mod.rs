//! Resilience around the single suspension point: the network round trip.
//!
//! # Design Decisions
//! - No policy is hardcoded; retries and timeouts are explicit caller
//!   configuration on the dispatcher
//! - The default reproduces the bare workflow: one attempt, no deadline

pub mod retries;

pub use retries::RetryPolicy;
