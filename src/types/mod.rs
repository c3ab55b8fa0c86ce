//! Shared Types Module
//!
//! Data records returned by the blockchain gateway and served to the
//! explorer frontend. Field names serialize as camelCase to match the
//! frontend's existing wire contract.

pub mod actions;
pub mod address;
pub mod vote;

// Re-exports for convenience
pub use actions::{Deposit, Execution, Transfer};
pub use address::AddressDetails;
pub use vote::Vote;
