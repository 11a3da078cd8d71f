//! Submission subsystem.
//!
//! # Data Flow
//! ```text
//! OperationRequest
//!     → pipeline.rs (retry policy, timeout, state transitions)
//!     → client.rs (LedgerClient: sign, encode, broadcast; external)
//!     → reporter.rs (interpret SubmissionResult, log outcome)
//! ```
//!
//! # Security Constraints
//! - Signing happens entirely inside the ledger client
//! - Requests are never partially applied; the ledger accepts or rejects
//!   atomically

pub mod client;
pub mod pipeline;
pub mod reporter;

pub use client::LedgerClient;
pub use pipeline::Dispatcher;
