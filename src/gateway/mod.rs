//! Blockchain Gateway Interface
//!
//! The gateway is the external chain node (or indexer) that answers
//! address-centric explorer queries. The trait keeps the wire protocol out
//! of the handlers and lets tests substitute a mock.
//!
//! Implementations:
//! - `HttpGateway` - Production JSON-RPC client
//! - `MockGateway` - Generated mock for handler tests

pub mod http;

pub use http::HttpGateway;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{AddressDetails, Deposit, Execution, Transfer, Vote};

/// Gateway errors
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure, including request timeouts
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success HTTP status
    #[error("gateway returned HTTP {0}")]
    Status(u16),

    /// The gateway answered with an RPC-level error
    #[error("gateway error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The gateway response could not be decoded
    #[error("failed to decode gateway response: {0}")]
    Decode(String),
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Address-centric explorer queries answered by the chain gateway
///
/// `offset`/`count` are forwarded verbatim; any clamping is the gateway's
/// business. Vote windows may contain empty slots (`None`), which the
/// voters handler strips.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Look up summary details for an address
    async fn get_address_details(&self, id: &str) -> GatewayResult<AddressDetails>;

    /// Page of transfers involving an address
    async fn get_transfers_by_address(
        &self,
        id: &str,
        offset: u64,
        count: u64,
    ) -> GatewayResult<Vec<Transfer>>;

    /// Page of contract executions involving an address
    async fn get_executions_by_address(
        &self,
        id: &str,
        offset: u64,
        count: u64,
    ) -> GatewayResult<Vec<Execution>>;

    /// Page of settle-deposit actions involving an address
    async fn get_settle_deposits_by_address(
        &self,
        id: &str,
        offset: u64,
        count: u64,
    ) -> GatewayResult<Vec<Deposit>>;

    /// Page of create-deposit actions involving an address
    async fn get_create_deposits_by_address(
        &self,
        id: &str,
        offset: u64,
        count: u64,
    ) -> GatewayResult<Vec<Deposit>>;

    /// Page of votes cast by an address, possibly with empty slots
    async fn get_votes_by_address(
        &self,
        id: &str,
        offset: u64,
        count: u64,
    ) -> GatewayResult<Vec<Option<Vote>>>;
}
