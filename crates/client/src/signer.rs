use crate::{ClientError, RemoteSigner};
use alloy_consensus::TxEnvelope;
use alloy_network::{eip2718::Encodable2718, EthereumWallet, TransactionBuilder};
use alloy_primitives::{Address, Bytes};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use alloy_signer_local::PrivateKeySigner;
use std::{future::Future, pin::Pin, sync::Arc};
use tracing::debug;

/// Signs a transaction request and returns the EIP-2718 encoded transaction.
pub type SignerFn = Arc<
    dyn Fn(TransactionRequest) -> Pin<Box<dyn Future<Output = eyre::Result<Bytes>> + Send>>
        + Send
        + Sync,
>;

/// Gas estimate headroom, in percent.
const GAS_BUFFER_PERCENT: u64 = 20;

/// Sign through a signer-proxy. `provider` fills nonce, fees and gas first.
pub fn remote_signer_fn<P>(remote: RemoteSigner, provider: P) -> SignerFn
where
    P: Provider + Clone + 'static,
{
    Arc::new(move |tx| {
        let remote = remote.clone();
        let provider = provider.clone();
        Box::pin(async move {
            let tx = fill_transaction(tx, &provider, remote.address(), remote.chain_id()).await?;
            Ok(remote.sign_transaction(tx).await?)
        })
    })
}

/// Sign with a local private key. `provider` fills nonce, fees and gas first.
pub fn local_signer_fn<P>(
    private_key: &str,
    chain_id: u64,
    provider: P,
) -> Result<SignerFn, ClientError>
where
    P: Provider + Clone + 'static,
{
    let signer: PrivateKeySigner = private_key
        .parse()
        .map_err(|e| ClientError::InvalidPrivateKey(format!("{e}")))?;
    let from = signer.address();
    let wallet = EthereumWallet::from(signer);

    Ok(Arc::new(move |tx: TransactionRequest| {
        let wallet = wallet.clone();
        let provider = provider.clone();
        Box::pin(async move {
            let tx = fill_transaction(tx, &provider, from, chain_id).await?;

            let envelope: TxEnvelope = tx.build(&wallet).await.map_err(|e| eyre::eyre!("{e}"))?;
            Ok(Bytes::from(envelope.encoded_2718()))
        })
    }))
}

/// Fill the fields a signer needs but the caller left unset.
async fn fill_transaction<P>(
    mut tx: TransactionRequest,
    provider: &P,
    from: Address,
    chain_id: u64,
) -> eyre::Result<TransactionRequest>
where
    P: Provider,
{
    let from = *tx.from.get_or_insert(from);
    tx.chain_id.get_or_insert(chain_id);

    if tx.nonce.is_none() {
        tx.nonce = Some(provider.get_transaction_count(from).await?);
    }

    // Fees before gas: estimation may depend on them.
    if tx.max_fee_per_gas.is_none() || tx.max_priority_fee_per_gas.is_none() {
        let fees = provider.estimate_eip1559_fees().await?;
        tx.max_fee_per_gas.get_or_insert(fees.max_fee_per_gas);
        tx.max_priority_fee_per_gas
            .get_or_insert(fees.max_priority_fee_per_gas);
    }

    if tx.gas.is_none() {
        let estimate = provider.estimate_gas(tx.clone()).await?;
        tx.gas = Some(with_gas_buffer(estimate));
    }

    debug!(
        from = %from,
        nonce = ?tx.nonce,
        gas = ?tx.gas,
        max_fee_per_gas = ?tx.max_fee_per_gas,
        "Filled transaction"
    );
    Ok(tx)
}

const fn with_gas_buffer(estimate: u64) -> u64 {
    estimate.saturating_add(estimate.saturating_mul(GAS_BUFFER_PERCENT) / 100)
}
