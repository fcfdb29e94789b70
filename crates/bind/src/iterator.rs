//! Cursor over decoded event logs.

use crate::{BindError, DecodedLog, LogSubscription, Result};
use alloy_rpc_types_eth::Log;
use alloy_sol_types::SolEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Logs may still arrive
    Draining,
    /// Log channel closed, only buffered logs or a late error remain
    Exhausted,
    /// A decode or subscription error was retained
    Failed,
}

enum Next {
    Log(Log),
    Closed,
    Error(BindError),
}

/// Iterates the logs of one event type delivered by a [`LogSubscription`].
///
/// ```ignore
/// let mut logs = executor.filter_account_created(&FilterOpts::since(0), &[]).await?;
/// while logs.advance().await {
///     let created = logs.event().unwrap();
///     println!("{} at {:?}", created.account, created.block_number());
/// }
/// if let Some(err) = logs.error() {
///     return Err(err.clone().into());
/// }
/// logs.close()?;
/// ```
#[derive(Debug)]
pub struct LogIterator<E> {
    subscription: LogSubscription,
    state: State,
    event: Option<DecodedLog<E>>,
    error: Option<BindError>,
}

impl<E: SolEvent> LogIterator<E> {
    pub fn new(subscription: LogSubscription) -> Self {
        Self {
            subscription,
            state: State::Draining,
            event: None,
            error: None,
        }
    }

    /// Move to the next log. Returns `false` when there are no more logs or
    /// an error occurred; check [`LogIterator::error`] to tell them apart.
    ///
    /// Logs already buffered are delivered before a pending subscription
    /// error, so the error surfaces once the buffer is empty.
    pub async fn advance(&mut self) -> bool {
        match self.state {
            State::Failed => false,
            State::Exhausted => {
                let (logs, errors) = self.subscription.split();
                if let Ok(log) = logs.try_recv() {
                    return self.deliver(log);
                }
                // The error may have been reported after the log channel closed.
                if let Ok(err) = errors.try_recv() {
                    self.fail(err);
                }
                false
            }
            State::Draining => {
                let next = {
                    let (logs, errors) = self.subscription.split();
                    tokio::select! {
                        biased;

                        log = logs.recv() => match log {
                            Some(log) => Next::Log(log),
                            None => Next::Closed,
                        },
                        Some(err) = errors.recv() => Next::Error(err),
                    }
                };

                match next {
                    Next::Log(log) => self.deliver(log),
                    Next::Error(err) => {
                        self.fail(err);
                        false
                    }
                    Next::Closed => {
                        self.state = State::Exhausted;
                        if let Some(err) = self.subscription.try_error() {
                            self.fail(err);
                        }
                        false
                    }
                }
            }
        }
    }

    /// Drain the remaining logs, stopping at the first error.
    pub async fn collect(mut self) -> Result<Vec<DecodedLog<E>>> {
        let mut events = Vec::new();
        while self.advance().await {
            if let Some(event) = self.event.take() {
                events.push(event);
            }
        }
        self.close()?;

        match self.error {
            Some(err) => Err(err),
            None => Ok(events),
        }
    }

    fn deliver(&mut self, log: Log) -> bool {
        match DecodedLog::decode(log) {
            Ok(event) => {
                self.event = Some(event);
                true
            }
            Err(err) => {
                self.fail(err);
                false
            }
        }
    }

    fn fail(&mut self, err: BindError) {
        self.event = None;
        self.error = Some(err);
        self.state = State::Failed;
    }
}

impl<E> LogIterator<E> {
    /// Event at the current position, set by a successful `advance`.
    pub const fn event(&self) -> Option<&DecodedLog<E>> {
        self.event.as_ref()
    }

    pub fn take_event(&mut self) -> Option<DecodedLog<E>> {
        self.event.take()
    }

    /// Error that stopped iteration, if any.
    pub const fn error(&self) -> Option<&BindError> {
        self.error.as_ref()
    }

    /// Unsubscribe from the underlying subscription. Safe to call repeatedly.
    ///
    /// Unsubscribing cannot be observed to fail, so this always returns `Ok`.
    pub fn close(&mut self) -> Result<()> {
        self.subscription.unsubscribe();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogSender;
    use alloy_primitives::{Address, Bytes, LogData, B256};
    use alloy_sol_types::sol;

    sol! {
        #[derive(Debug, PartialEq, Eq)]
        event Stored(address indexed account, bytes signature);
    }

    fn stored(byte: u8) -> Log {
        let event = Stored {
            account: Address::repeat_byte(byte),
            signature: Bytes::from(vec![byte]),
        };
        Log {
            inner: alloy_primitives::Log {
                address: Address::repeat_byte(1),
                data: event.encode_log_data(),
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_drains_then_stops_without_error() {
        let subscription = LogSubscription::from_logs(vec![stored(0xa), stored(0xb)]);
        let mut it = LogIterator::<Stored>::new(subscription);

        assert!(it.advance().await);
        assert_eq!(it.event().unwrap().account, Address::repeat_byte(0xa));
        assert!(it.advance().await);
        assert_eq!(it.event().unwrap().account, Address::repeat_byte(0xb));

        assert!(!it.advance().await);
        assert!(it.error().is_none());
        // Exhausted stays exhausted.
        assert!(!it.advance().await);
        assert!(it.error().is_none());
    }

    #[tokio::test]
    async fn test_error_while_draining() {
        let (sender, subscription) = LogSubscription::channel();
        let mut it = LogIterator::<Stored>::new(subscription);

        sender.send(stored(1));
        sender.fail(BindError::Subscription("filter not found".into()));

        assert!(it.advance().await);
        assert!(!it.advance().await);
        assert_eq!(
            it.error(),
            Some(&BindError::Subscription("filter not found".into()))
        );
        assert!(it.event().is_none());
        assert!(!it.advance().await);
    }

    #[tokio::test]
    async fn test_buffered_logs_precede_pending_error() {
        let (sender, subscription) = LogSubscription::channel();
        let mut it = LogIterator::<Stored>::new(subscription);

        sender.fail(BindError::Subscription("filter expired".into()));
        sender.send(stored(1));
        sender.send(stored(2));

        assert!(it.advance().await);
        assert!(it.advance().await);
        assert!(it.error().is_none());
        assert!(!it.advance().await);
        assert_eq!(
            it.error(),
            Some(&BindError::Subscription("filter expired".into()))
        );
    }

    #[tokio::test]
    async fn test_late_error_after_log_channel_closed() {
        let (sender, subscription) = LogSubscription::channel();
        let mut it = LogIterator::<Stored>::new(subscription);

        let LogSender { logs, errors } = sender;
        logs.send(stored(1)).unwrap();
        drop(logs);

        assert!(it.advance().await);
        assert!(!it.advance().await);
        assert!(it.error().is_none());

        errors
            .send(BindError::Transport("connection reset".into()))
            .unwrap();

        assert!(!it.advance().await);
        assert_eq!(
            it.error(),
            Some(&BindError::Transport("connection reset".into()))
        );
    }

    #[tokio::test]
    async fn test_undecodable_log_fails() {
        let mut bad = stored(1);
        bad.inner.data = LogData::new_unchecked(vec![B256::repeat_byte(0xee)], Bytes::new());
        let mut it = LogIterator::<Stored>::new(LogSubscription::from_logs(vec![bad, stored(2)]));

        assert!(!it.advance().await);
        assert!(matches!(it.error(), Some(BindError::Decoding { .. })));
        assert!(!it.advance().await);
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let (sender, subscription) = LogSubscription::channel();
        let mut it = LogIterator::<Stored>::new(subscription);

        assert!(it.close().is_ok());
        assert!(it.close().is_ok());
        assert!(sender.is_closed());
        assert!(!it.advance().await);
        assert!(it.error().is_none());
    }

    #[tokio::test]
    async fn test_collect() {
        let it = LogIterator::<Stored>::new(LogSubscription::from_logs(vec![stored(3), stored(4)]));

        let events = it.collect().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].signature, Bytes::from(vec![4]));
    }
}
