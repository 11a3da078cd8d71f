//! Typed construction, guarding, submission, and reporting of Stacks
//! ledger operations.
//!
//! # Architecture Overview
//!
//! ```text
//!  caller parameters
//!       │
//!       ▼
//!  ┌──────────────┐     ┌──────────────────┐     ┌──────────────┐
//!  │   request    │────▶│     submit       │────▶│   reporter   │
//!  │  builder +   │     │ Dispatcher over  │     │ txid or      │
//!  │  guards      │     │ LedgerClient     │     │ SubmissionFailed
//!  └──────────────┘     └────────┬─────────┘     └──────────────┘
//!                                │
//!                       ┌────────▼─────────┐
//!                       │  query (read-    │
//!                       │  only, no key)   │
//!                       └──────────────────┘
//!
//!  Cross-cutting: clarity (typed values), config, resilience (retry policy)
//! ```
//!
//! The external ledger library (signing, wire encoding, broadcast) sits
//! behind the [`LedgerClient`] trait and is never implemented here.
//! Network selection is an explicit [`NetworkTarget`] value on every call.

// Core subsystems
pub mod clarity;
pub mod query;
pub mod request;
pub mod submit;

// Cross-cutting concerns
pub mod config;
pub mod resilience;
pub mod types;

pub use clarity::{ClarityValue, ContractId, DecodedValue, Principal};
pub use config::schema::DispatchConfig;
pub use query::ReadOnlyCall;
pub use request::{
    AssetGuard, AssetId, Comparator, OperationRequest, RequestBuilder, SafetyMode, SigningKey,
};
pub use resilience::RetryPolicy;
pub use submit::{Dispatcher, LedgerClient};
pub use types::{
    DispatchError, DispatchResult, NetworkTarget, SubmissionResult, TransactionId,
};
