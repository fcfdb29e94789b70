//! JSON-RPC transport for the contract bindings.
//!
//! [`ProviderBackend`] adapts any alloy [`Provider`] to the call, transact
//! and log capabilities the bindings delegate to. Transactions are either
//! signed by the provider's wallet or by a [`SignerFn`] (local key or
//! remote signer-proxy) and broadcast raw.

mod backend;
mod logs;
mod remote_signer;
mod signer;

use alloy_network::EthereumWallet;
use alloy_provider::{Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
pub use backend::{ProviderBackend, DEFAULT_MAX_BLOCK_RANGE, DEFAULT_POLL_INTERVAL};
pub use remote_signer::RemoteSigner;
pub use signer::{local_signer_fn, remote_signer_fn, SignerFn};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Error parsing or validating URLs
    #[error("Invalid RPC URL: {0}")]
    InvalidUrl(String),

    /// Error connecting to the RPC endpoint
    #[error("Connection error: {0}")]
    Connection(String),

    /// Error with private key
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// The endpoint serves a different chain than configured
    #[error("Chain ID mismatch: expected {expected}, endpoint reports {actual}")]
    ChainIdMismatch { expected: u64, actual: u64 },

    /// The signer-proxy rejected or failed a signing request
    #[error("Remote signer error: {0}")]
    Signer(String),
}

/// Create a read-only provider for `rpc_url`.
pub fn create_provider(rpc_url: &str) -> Result<impl Provider + Clone, ClientError> {
    let url = rpc_url
        .parse()
        .map_err(|e| ClientError::InvalidUrl(format!("{e}")))?;

    Ok(ProviderBuilder::new().connect_http(url))
}

/// Create a provider that signs `eth_sendTransaction` requests with a local key.
pub fn create_wallet_provider(
    rpc_url: &str,
    private_key: &str,
) -> Result<impl Provider + Clone, ClientError> {
    let url = rpc_url
        .parse()
        .map_err(|e| ClientError::InvalidUrl(format!("{e}")))?;

    let signer: PrivateKeySigner = private_key
        .parse()
        .map_err(|e| ClientError::InvalidPrivateKey(format!("{e}")))?;

    Ok(ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(url))
}

/// Check that `provider` serves `expected` before binding contracts to it.
pub async fn verify_chain_id<P: Provider>(provider: &P, expected: u64) -> Result<(), ClientError> {
    let actual = provider
        .get_chain_id()
        .await
        .map_err(|e| ClientError::Connection(e.to_string()))?;

    if actual != expected {
        return Err(ClientError::ChainIdMismatch { expected, actual });
    }

    info!(chain_id = actual, "Connected to RPC endpoint");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url() {
        assert!(matches!(
            create_provider("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_invalid_private_key() {
        assert!(matches!(
            create_wallet_provider("http://localhost:8545", "0xnot-a-key"),
            Err(ClientError::InvalidPrivateKey(_))
        ));
    }

    #[test]
    fn test_chain_id_mismatch_message() {
        let err = ClientError::ChainIdMismatch {
            expected: 8453,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Chain ID mismatch: expected 8453, endpoint reports 1"
        );
    }
}
