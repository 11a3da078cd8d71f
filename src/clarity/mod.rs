//! Typed Clarity values, principals, and result decoding.
//!
//! # Data Flow
//! ```text
//! caller parameters (u128, &str, Option<&str>)
//!     → value.rs (tagged ClarityValue construction + validation)
//!     → principal.rs (address / contract-id parsing)
//!     → request arguments, handed to the ledger client untouched
//!
//! read-only call result (client's cv-to-JSON output)
//!     → decode.rs (envelope unwrap, typed extraction)
//! ```

pub mod decode;
pub mod principal;
pub mod units;
pub mod value;

pub use decode::DecodedValue;
pub use principal::{Address, ContractId, Principal};
pub use value::ClarityValue;
