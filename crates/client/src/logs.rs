//! Historical log scans and live log forwarding over JSON-RPC.

use alloy_provider::Provider;
use alloy_rpc_types_eth::Log;
use bind::{BindError, LogQuery, LogSender};
use futures::{Stream, StreamExt};
use std::pin::pin;
use tokio_retry::{strategy::ExponentialBackoff, Retry};
use tracing::{debug, warn};

/// Fetch `[from_block, to_block]` in windows of at most `max_range` blocks.
///
/// Providers cap the range of a single `eth_getLogs` request, so long scans
/// are split. Each window is retried with exponential backoff.
pub(crate) async fn scan<P: Provider>(
    provider: &P,
    query: &LogQuery,
    from_block: u64,
    to_block: u64,
    max_range: u64,
) -> Result<Vec<Log>, BindError> {
    let max_range = max_range.max(1);
    let mut logs = Vec::new();
    let mut current = from_block;

    while current <= to_block {
        let chunk_end = current.saturating_add(max_range - 1).min(to_block);

        debug!(
            address = %query.address,
            from = current,
            to = chunk_end,
            "Scanning chunk for logs"
        );

        logs.extend(scan_chunk_with_retry(provider, query, current, chunk_end).await?);

        if chunk_end == u64::MAX {
            break;
        }
        current = chunk_end + 1;
    }

    Ok(logs)
}

async fn scan_chunk_with_retry<P: Provider>(
    provider: &P,
    query: &LogQuery,
    from_block: u64,
    to_block: u64,
) -> Result<Vec<Log>, BindError> {
    // 100ms, 200ms, 400ms, 800ms, 1.6s
    let retry_strategy = ExponentialBackoff::from_millis(100).take(5);
    let filter = query
        .clone()
        .with_range(Some(from_block), Some(to_block))
        .to_filter();

    Retry::spawn(retry_strategy, || async {
        provider.get_logs(&filter).await.map_err(|e| {
            warn!(
                from = from_block,
                to = to_block,
                error = %e,
                "Log chunk scan failed, will retry"
            );
            e
        })
    })
    .await
    .map_err(|e| BindError::Transport(e.to_string()))
}

/// Deliver `backlog`, then every batch of `polls`, until the consumer
/// unsubscribes. The poller ending is reported as a subscription error.
pub(crate) async fn forward<S>(polls: S, sender: LogSender, backlog: Vec<Log>, query: LogQuery)
where
    S: Stream<Item = Vec<Log>>,
{
    for log in backlog {
        if !sender.send(log) {
            return;
        }
    }

    let mut polls = pin!(polls);
    loop {
        tokio::select! {
            _ = sender.closed() => {
                debug!(address = %query.address, "Log subscription closed by consumer");
                return;
            }
            batch = polls.next() => {
                let Some(batch) = batch else {
                    warn!(address = %query.address, "Log filter poller stopped");
                    sender.fail(BindError::Subscription("log filter poller stopped".into()));
                    return;
                };

                // The node already filters; the local check drops anything a
                // lenient endpoint lets through.
                for log in batch.into_iter().filter(|log| query.matches(log)) {
                    if !sender.send(log) {
                        return;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, LogData, B256};
    use bind::{LogSubscription, TopicFilter};

    fn log(signature: B256, block: u64) -> Log {
        Log {
            inner: alloy_primitives::Log {
                address: Address::repeat_byte(1),
                data: LogData::new_unchecked(vec![signature], Default::default()),
            },
            block_number: Some(block),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_forward_backlog_then_polls() {
        let signature = B256::repeat_byte(0x51);
        let query = LogQuery::new(Address::repeat_byte(1), signature, TopicFilter::any());
        let (sender, mut subscription) = LogSubscription::channel();
        let polls = futures::stream::iter(vec![
            vec![log(signature, 2), log(B256::ZERO, 2)],
            vec![log(signature, 3)],
        ]);

        forward(polls, sender, vec![log(signature, 1)], query).await;

        let mut blocks = Vec::new();
        while let Some(log) = subscription.recv().await {
            blocks.push(log.block_number.unwrap());
        }
        assert_eq!(blocks, vec![1, 2, 3]);
        assert!(matches!(
            subscription.try_error(),
            Some(BindError::Subscription(_))
        ));
    }

    #[tokio::test]
    async fn test_forward_stops_when_unsubscribed() {
        let signature = B256::repeat_byte(0x51);
        let query = LogQuery::new(Address::repeat_byte(1), signature, TopicFilter::any());
        let (sender, mut subscription) = LogSubscription::channel();
        subscription.unsubscribe();

        // A poller that never yields; only the closed consumer ends the task.
        forward(futures::stream::pending(), sender, Vec::new(), query).await;

        assert!(subscription.try_error().is_none());
    }
}
