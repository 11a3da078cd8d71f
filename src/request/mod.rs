//! Operation request construction.
//!
//! # Data Flow
//! ```text
//! caller parameters (kind, target, typed args, fee, key, guards)
//!     → builder.rs (validation, canonical argument assembly)
//!     → OperationRequest (immutable)
//!     → submit::Dispatcher
//! ```

pub mod builder;
pub mod guard;
pub mod types;

pub use builder::RequestBuilder;
pub use guard::{AssetGuard, AssetId, Comparator};
pub use types::{AnchorMode, Operation, OperationRequest, SafetyMode, SigningKey};
