//! Capabilities a bound contract delegates to.
//!
//! A contract client is split into three roles: read-only calls,
//! state-changing transactions and log queries. A transport implements
//! whichever roles it supports; `BoundContract` only exposes operations
//! for the roles it was given.

use crate::{BindError, CallOpts, LogQuery, Result, TransactOpts};
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_rpc_types_eth::{BlockNumberOrTag, Log, TransactionRequest};
use std::future::Future;
use tokio::sync::mpsc;

/// Read-only contract access.
pub trait ContractCaller: Send + Sync {
    /// Execute `input` against `to` without creating a transaction.
    fn call_contract(
        &self,
        opts: &CallOpts,
        to: Address,
        input: Bytes,
    ) -> impl Future<Output = Result<Bytes>> + Send;

    /// Deployed code at `address`.
    fn code_at(
        &self,
        address: Address,
        block: Option<BlockNumberOrTag>,
    ) -> impl Future<Output = Result<Bytes>> + Send;
}

/// State-changing contract access. Signing belongs to the implementation.
pub trait ContractTransactor: Send + Sync {
    /// Sign and (unless `opts.no_send`) submit a transaction to `to`.
    fn send_transaction(
        &self,
        opts: &TransactOpts,
        to: Address,
        input: Bytes,
    ) -> impl Future<Output = Result<SentTransaction>> + Send;
}

/// Log queries and subscriptions.
pub trait ContractFilterer: Send + Sync {
    /// All historical logs matching `query`.
    fn filter_logs(&self, query: &LogQuery) -> impl Future<Output = Result<Vec<Log>>> + Send;

    /// Live logs matching `query`, delivered until unsubscribed.
    fn subscribe_logs(
        &self,
        query: &LogQuery,
    ) -> impl Future<Output = Result<LogSubscription>> + Send;
}

/// Handle to a submitted (or signed but unsent) transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentTransaction {
    /// Transaction hash
    pub hash: TxHash,
    /// Request handed to the transactor
    pub request: TransactionRequest,
    /// EIP-2718 encoded signed transaction, when the transactor signed locally
    pub raw: Option<Bytes>,
}

/// Channels of an open log subscription.
///
/// Logs arrive on one channel, a terminal subscription error on the other.
/// Both closing without an error means the subscription completed.
/// Unsubscribing closes the log channel; producers watch for that to stop.
#[derive(Debug)]
pub struct LogSubscription {
    logs: mpsc::UnboundedReceiver<Log>,
    errors: mpsc::UnboundedReceiver<BindError>,
}

/// Producer side of a [`LogSubscription`].
///
/// Dropping `logs` while keeping `errors` lets a producer report an error
/// that arrives after the last log.
#[derive(Debug, Clone)]
pub struct LogSender {
    pub logs: mpsc::UnboundedSender<Log>,
    pub errors: mpsc::UnboundedSender<BindError>,
}

impl LogSubscription {
    /// Open a subscription and return it with its producer handle.
    pub fn channel() -> (LogSender, Self) {
        let (logs_tx, logs) = mpsc::unbounded_channel();
        let (errors_tx, errors) = mpsc::unbounded_channel();
        (
            LogSender {
                logs: logs_tx,
                errors: errors_tx,
            },
            Self { logs, errors },
        )
    }

    /// A completed subscription over an already fetched backlog.
    pub fn from_logs(logs: Vec<Log>) -> Self {
        let (sender, subscription) = Self::channel();
        for log in logs {
            // Receiver is alive, cannot fail.
            let _ = sender.logs.send(log);
        }
        subscription
    }

    /// Stop delivery. Already buffered logs can still be received.
    pub fn unsubscribe(&mut self) {
        self.logs.close();
        self.errors.close();
    }

    pub(crate) fn split(
        &mut self,
    ) -> (
        &mut mpsc::UnboundedReceiver<Log>,
        &mut mpsc::UnboundedReceiver<BindError>,
    ) {
        (&mut self.logs, &mut self.errors)
    }

    /// Next log, `None` once the log channel is closed and drained.
    pub async fn recv(&mut self) -> Option<Log> {
        self.logs.recv().await
    }

    /// Subscription error, if one is already pending.
    pub fn try_error(&mut self) -> Option<BindError> {
        self.errors.try_recv().ok()
    }
}

impl LogSender {
    /// Deliver a log. Returns `false` once the subscriber is gone.
    pub fn send(&self, log: Log) -> bool {
        self.logs.send(log).is_ok()
    }

    /// Report a terminal error to the subscriber.
    pub fn fail(&self, error: BindError) {
        let _ = self.errors.send(error);
    }

    /// Whether the subscriber unsubscribed or was dropped.
    pub fn is_closed(&self) -> bool {
        self.logs.is_closed()
    }

    /// Resolves when the subscriber unsubscribes or is dropped.
    pub async fn closed(&self) {
        self.logs.closed().await
    }
}
