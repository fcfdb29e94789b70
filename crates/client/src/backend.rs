use crate::{logs, SignerFn};
use alloy_primitives::{keccak256, Address, Bytes, TxKind};
use alloy_provider::Provider;
use alloy_rpc_types_eth::{
    BlockId, BlockNumberOrTag, Log, TransactionInput, TransactionRequest,
};
use bind::{
    BindError, CallOpts, ContractCaller, ContractFilterer, ContractTransactor, LogQuery,
    LogSubscription, Result, SentTransaction, TransactOpts,
};
use std::{fmt, time::Duration};
use tracing::debug;

/// Largest block range fetched by a single `eth_getLogs` request.
pub const DEFAULT_MAX_BLOCK_RANGE: u64 = 9_500;

/// Interval between `eth_getFilterChanges` polls of a live subscription.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(4);

/// Contract backend over an alloy provider.
///
/// Without a signer, transactions go through `eth_sendTransaction` and rely
/// on the provider's wallet. With a [`SignerFn`], they are signed first and
/// broadcast with `eth_sendRawTransaction`.
#[derive(Clone)]
pub struct ProviderBackend<P> {
    provider: P,
    signer: Option<SignerFn>,
    max_block_range: u64,
    poll_interval: Duration,
}

impl<P> ProviderBackend<P> {
    pub const fn new(provider: P) -> Self {
        Self {
            provider,
            signer: None,
            max_block_range: DEFAULT_MAX_BLOCK_RANGE,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_signer(mut self, signer: SignerFn) -> Self {
        self.signer = Some(signer);
        self
    }

    pub const fn with_max_block_range(mut self, max_block_range: u64) -> Self {
        self.max_block_range = max_block_range;
        self
    }

    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P> fmt::Debug for ProviderBackend<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderBackend")
            .field("signer", &self.signer.is_some())
            .field("max_block_range", &self.max_block_range)
            .field("poll_interval", &self.poll_interval)
            .finish_non_exhaustive()
    }
}

fn transport(err: impl fmt::Display) -> BindError {
    BindError::Transport(err.to_string())
}

fn block_id(block: Option<BlockNumberOrTag>) -> BlockId {
    block.map_or_else(BlockId::latest, BlockId::Number)
}

impl<P: Provider + Clone + 'static> ContractCaller for ProviderBackend<P> {
    async fn call_contract(&self, opts: &CallOpts, to: Address, input: Bytes) -> Result<Bytes> {
        let tx = TransactionRequest {
            from: opts.from,
            to: Some(TxKind::Call(to)),
            input: TransactionInput::new(input),
            ..Default::default()
        };

        self.provider
            .call(tx)
            .block(block_id(opts.block))
            .await
            .map_err(transport)
    }

    async fn code_at(&self, address: Address, block: Option<BlockNumberOrTag>) -> Result<Bytes> {
        self.provider
            .get_code_at(address)
            .block_id(block_id(block))
            .await
            .map_err(transport)
    }
}

impl<P: Provider + Clone + 'static> ContractTransactor for ProviderBackend<P> {
    async fn send_transaction(
        &self,
        opts: &TransactOpts,
        to: Address,
        input: Bytes,
    ) -> Result<SentTransaction> {
        let request = opts.to_request(to, input);

        let Some(sign) = &self.signer else {
            if opts.no_send {
                return Err(BindError::Signing(
                    "signing without sending needs a local or remote signer".into(),
                ));
            }
            let pending = self
                .provider
                .send_transaction(request.clone())
                .await
                .map_err(transport)?;
            return Ok(SentTransaction {
                hash: *pending.tx_hash(),
                request,
                raw: None,
            });
        };

        let raw = sign(request.clone())
            .await
            .map_err(|e| BindError::Signing(e.to_string()))?;

        let hash = if opts.no_send {
            keccak256(&raw)
        } else {
            let pending = self
                .provider
                .send_raw_transaction(&raw)
                .await
                .map_err(transport)?;
            *pending.tx_hash()
        };

        debug!(tx_hash = %hash, to = %to, sent = !opts.no_send, "Signed transaction");
        Ok(SentTransaction {
            hash,
            request,
            raw: Some(raw),
        })
    }
}

impl<P: Provider + Clone + 'static> ContractFilterer for ProviderBackend<P> {
    async fn filter_logs(&self, query: &LogQuery) -> Result<Vec<Log>> {
        let to_block = match query.to_block {
            Some(to_block) => to_block,
            None => self.provider.get_block_number().await.map_err(transport)?,
        };
        let from_block = query.from_block.unwrap_or(to_block);

        logs::scan(
            &self.provider,
            query,
            from_block,
            to_block,
            self.max_block_range,
        )
        .await
    }

    async fn subscribe_logs(&self, query: &LogQuery) -> Result<LogSubscription> {
        // Install the filter before scanning the backlog: a log may then be
        // delivered twice but none is skipped.
        let live = query.clone().with_range(None, None);
        let poller = self
            .provider
            .watch_logs(&live.to_filter())
            .await
            .map_err(transport)?;

        let backlog = match query.from_block {
            Some(from) => {
                self.filter_logs(&query.clone().with_range(Some(from), None))
                    .await?
            }
            None => Vec::new(),
        };

        debug!(
            address = %query.address,
            backlog = backlog.len(),
            poll_interval = ?self.poll_interval,
            "Subscribed to logs"
        );

        let (sender, subscription) = LogSubscription::channel();
        let polls = poller.with_poll_interval(self.poll_interval).into_stream();
        tokio::spawn(logs::forward(polls, sender, backlog, live));

        Ok(subscription)
    }
}
