//! Address-related Action Records
//!
//! Transfers, contract executions, and deposit actions as the gateway
//! returns them. Amounts are decimal strings in the chain's base unit.

use serde::{Deserialize, Serialize};

/// A token transfer involving an address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Action hash
    pub id: String,
    pub sender: String,
    pub recipient: String,
    pub amount: String,
    /// Fee paid, if already mined
    #[serde(default)]
    pub fee: Option<String>,
    /// Unix timestamp (seconds)
    pub timestamp: u64,
    /// Containing block hash, absent while pending
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub is_pending: bool,
}

/// A contract execution involving an address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    /// Action hash
    pub id: String,
    pub executor: String,
    /// Target contract address, empty for contract creation
    #[serde(default)]
    pub contract: String,
    pub amount: String,
    /// Unix timestamp (seconds)
    pub timestamp: u64,
    #[serde(default)]
    pub block_id: Option<String>,
}

/// A cross-chain deposit action (settle or create)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    /// Action hash
    pub id: String,
    pub sender: String,
    pub recipient: String,
    pub amount: String,
    /// Unix timestamp (seconds)
    pub timestamp: u64,
    #[serde(default)]
    pub block_id: Option<String>,
}
