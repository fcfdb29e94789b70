//! Transaction signing delegated to a signer-proxy service.
//!
//! The proxy answers `eth_signTransaction` JSON-RPC requests, typically
//! backed by an HSM or a secure enclave, and returns the raw signed
//! transaction.

use crate::ClientError;
use alloy_primitives::{Address, Bytes};
use alloy_rpc_types::eth::TransactionRequest;
use serde::{Deserialize, Serialize};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Client for a signer-proxy holding the key of one address on one chain.
///
/// ```ignore
/// let signer = RemoteSigner::new("http://localhost:9060", address, 8453);
/// let raw = signer.sign_transaction(request).await?;
/// provider.send_raw_transaction(&raw).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RemoteSigner {
    client: reqwest::Client,
    proxy_url: String,
    address: Address,
    chain_id: u64,
    next_id: Arc<AtomicU64>,
}

impl RemoteSigner {
    pub fn new(proxy_url: impl Into<String>, address: Address, chain_id: u64) -> Self {
        Self::with_client(reqwest::Client::new(), proxy_url, address, chain_id)
    }

    /// Use a preconfigured HTTP client (timeouts, TLS, headers).
    pub fn with_client(
        client: reqwest::Client,
        proxy_url: impl Into<String>,
        address: Address,
        chain_id: u64,
    ) -> Self {
        Self {
            client,
            proxy_url: proxy_url.into(),
            address,
            chain_id,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Sign a fully populated transaction and return its EIP-2718 encoding.
    pub async fn sign_transaction(&self, tx: TransactionRequest) -> Result<Bytes, ClientError> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method: "eth_signTransaction",
            params: [tx],
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
        };

        let response = self
            .client
            .post(&self.proxy_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(ClientError::Signer(format!(
                "signer-proxy returned {status}: {body}"
            )));
        }

        let response: JsonRpcResponse<SignedTransaction> = response
            .json()
            .await
            .map_err(|e| ClientError::Signer(format!("malformed response: {e}")))?;

        response.into_raw()
    }
}

#[derive(Debug, Serialize)]
struct JsonRpcRequest<T> {
    jsonrpc: &'static str,
    method: &'static str,
    params: T,
    id: u64,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct SignedTransaction {
    /// Hex encoded signed transaction
    raw: Bytes,
}

impl JsonRpcResponse<SignedTransaction> {
    fn into_raw(self) -> Result<Bytes, ClientError> {
        match (self.result, self.error) {
            (Some(signed), _) => Ok(signed.raw),
            (None, Some(error)) => Err(ClientError::Signer(format!(
                "JSON-RPC error {}: {}",
                error.code, error.message
            ))),
            (None, None) => Err(ClientError::Signer(
                "response carries neither result nor error".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_request_ids_increase() {
        let signer = RemoteSigner::new(
            "http://localhost:9060",
            address!("5CFFA347b0aE99cc01E5c01714cA5658e54a23D1"),
            8453,
        );
        let clone = signer.clone();

        assert_eq!(signer.next_id.fetch_add(1, Ordering::Relaxed), 1);
        assert_eq!(clone.next_id.fetch_add(1, Ordering::Relaxed), 2);
        assert_eq!(signer.chain_id(), 8453);
    }

    #[test]
    fn test_response_result() {
        let response: JsonRpcResponse<SignedTransaction> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"result":{"raw":"0x02f86c","tx":{}}}"#,
        )
        .unwrap();

        assert_eq!(
            response.into_raw().unwrap(),
            Bytes::from(vec![0x02, 0xf8, 0x6c])
        );
    }

    #[test]
    fn test_response_error() {
        let response: JsonRpcResponse<SignedTransaction> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"key not found"}}"#,
        )
        .unwrap();

        let err = response.into_raw().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Remote signer error: JSON-RPC error -32000: key not found"
        );
    }
}
