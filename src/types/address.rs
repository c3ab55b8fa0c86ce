//! Address Details

use serde::{Deserialize, Serialize};

/// Summary record for a chain address
///
/// The address id is an opaque lookup key; this layer performs no format
/// validation on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDetails {
    /// The address itself
    pub address: String,
    /// Total balance in the chain's base unit (decimal string)
    pub total_balance: String,
    /// Confirmed nonce
    pub nonce: u64,
    /// Nonce including pending actions
    pub pending_nonce: u64,
    /// Whether the address hosts contract code
    #[serde(default)]
    pub is_contract: bool,
}
