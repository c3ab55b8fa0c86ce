//! JSON-RPC Gateway Client
//!
//! Talks to the chain node's explorer RPC over HTTP POST. Every request
//! carries the configured timeout, so a hung gateway fails the call instead
//! of hanging the handler.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{Gateway, GatewayError, GatewayResult};
use crate::types::{AddressDetails, Deposit, Execution, Transfer, Vote};

/// JSON-RPC 2.0 response wrapper
#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

/// JSON-RPC 2.0 error member
#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// HTTP gateway client
#[derive(Debug)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    next_id: AtomicU64,
}

impl HttpGateway {
    /// Create a new client against the given RPC endpoint
    pub fn new(base_url: &str, timeout: Duration) -> GatewayResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a JSON-RPC call and decode the `result` member
    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> GatewayResult<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let resp = self.client.post(&self.base_url).json(&body).send().await?;

        if !resp.status().is_success() {
            return Err(GatewayError::Status(resp.status().as_u16()));
        }

        let rpc: RpcResponse<T> = resp
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        if let Some(err) = rpc.error {
            return Err(GatewayError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        rpc.result
            .ok_or_else(|| GatewayError::Decode(format!("{}: missing result member", method)))
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn get_address_details(&self, id: &str) -> GatewayResult<AddressDetails> {
        self.call("Explorer.getAddressDetails", json!([id])).await
    }

    async fn get_transfers_by_address(
        &self,
        id: &str,
        offset: u64,
        count: u64,
    ) -> GatewayResult<Vec<Transfer>> {
        self.call("Explorer.getTransfersByAddress", json!([id, offset, count]))
            .await
    }

    async fn get_executions_by_address(
        &self,
        id: &str,
        offset: u64,
        count: u64,
    ) -> GatewayResult<Vec<Execution>> {
        self.call("Explorer.getExecutionsByAddress", json!([id, offset, count]))
            .await
    }

    async fn get_settle_deposits_by_address(
        &self,
        id: &str,
        offset: u64,
        count: u64,
    ) -> GatewayResult<Vec<Deposit>> {
        self.call(
            "Explorer.getSettleDepositsByAddress",
            json!([id, offset, count]),
        )
        .await
    }

    async fn get_create_deposits_by_address(
        &self,
        id: &str,
        offset: u64,
        count: u64,
    ) -> GatewayResult<Vec<Deposit>> {
        self.call(
            "Explorer.getCreateDepositsByAddress",
            json!([id, offset, count]),
        )
        .await
    }

    async fn get_votes_by_address(
        &self,
        id: &str,
        offset: u64,
        count: u64,
    ) -> GatewayResult<Vec<Option<Vote>>> {
        self.call("Explorer.getVotesByAddress", json!([id, offset, count]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_trimmed() {
        let gateway = HttpGateway::new("http://localhost:14004/", Duration::from_secs(5)).unwrap();
        assert_eq!(gateway.base_url(), "http://localhost:14004");
    }

    #[test]
    fn test_rpc_result_decoding() {
        let rpc: RpcResponse<Vec<Option<Vote>>> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"result":[{"id":"v1","voter":"a","votee":"b","timestamp":1},null]}"#,
        )
        .unwrap();

        let votes = rpc.result.unwrap();
        assert_eq!(votes.len(), 2);
        assert!(votes[1].is_none());
        assert!(rpc.error.is_none());
    }

    #[test]
    fn test_rpc_error_decoding() {
        let rpc: RpcResponse<AddressDetails> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":2,"error":{"code":-32601,"message":"method not found"}}"#,
        )
        .unwrap();

        let err = rpc.error.unwrap();
        assert_eq!(err.code, -32601);
        assert!(rpc.result.is_none());
    }
}
