//! In-memory backend for exercising bindings without a node.

use crate::{
    BindError, CallOpts, ContractCaller, ContractFilterer, ContractTransactor, LogQuery,
    LogSender, LogSubscription, Result, SentTransaction, TransactOpts,
};
use alloy_primitives::{keccak256, Address, Bytes, Selector};
use alloy_rpc_types_eth::{BlockNumberOrTag, Log, TransactionRequest};
use alloy_sol_types::SolEvent;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// A call observed by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub to: Address,
    pub input: Bytes,
    pub opts: CallOpts,
}

#[derive(Debug, Default)]
struct State {
    responses: HashMap<Selector, Bytes>,
    code: HashMap<Address, Bytes>,
    calls: Vec<RecordedCall>,
    sent: Vec<TransactionRequest>,
    queries: Vec<LogQuery>,
    logs: Vec<Log>,
    subscribers: Vec<(LogQuery, LogSender)>,
    call_error: Option<BindError>,
    transact_error: Option<BindError>,
}

/// Backend answering calls from canned responses keyed by selector,
/// recording transactions and serving logs from memory.
///
/// Clones share state, so a test can keep a handle after binding a contract.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<State>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Answer calls whose calldata starts with `selector` with `output`.
    pub fn on_call(&self, selector: impl Into<Selector>, output: impl Into<Bytes>) {
        self.state()
            .responses
            .insert(selector.into(), output.into());
    }

    /// Deploy `code` at `address`.
    pub fn with_code(self, address: Address, code: impl Into<Bytes>) -> Self {
        self.state().code.insert(address, code.into());
        self
    }

    /// Fail every subsequent call with `error`.
    pub fn fail_calls(&self, error: BindError) {
        self.state().call_error = Some(error);
    }

    /// Fail every subsequent transaction with `error`.
    pub fn fail_transactions(&self, error: BindError) {
        self.state().transact_error = Some(error);
    }

    /// Add a historical log.
    pub fn push_log(&self, log: Log) {
        self.state().logs.push(log);
    }

    /// Record `log` and deliver it to every live subscription it matches.
    /// Returns the number of subscriptions that received it.
    pub fn emit(&self, log: Log) -> usize {
        let mut state = self.state();
        state.subscribers.retain(|(_, sender)| !sender.is_closed());

        let delivered = state
            .subscribers
            .iter()
            .filter(|(query, _)| query.matches(&log))
            .filter(|(_, sender)| sender.send(log.clone()))
            .count();

        state.logs.push(log);
        delivered
    }

    /// Terminate every live subscription with `error`.
    pub fn fail_subscriptions(&self, error: BindError) {
        for (_, sender) in self.state().subscribers.drain(..) {
            sender.fail(error.clone());
        }
    }

    /// Complete every live subscription without error.
    pub fn close_subscriptions(&self) {
        self.state().subscribers.clear();
    }

    /// Subscriptions whose consumer is still listening.
    pub fn active_subscriptions(&self) -> usize {
        self.state()
            .subscribers
            .iter()
            .filter(|(_, sender)| !sender.is_closed())
            .count()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state().calls.clone()
    }

    /// Broadcast transactions, in order.
    pub fn sent(&self) -> Vec<TransactionRequest> {
        self.state().sent.clone()
    }

    /// Historical log queries, in order.
    pub fn queries(&self) -> Vec<LogQuery> {
        self.state().queries.clone()
    }
}

impl ContractCaller for MockBackend {
    async fn call_contract(&self, opts: &CallOpts, to: Address, input: Bytes) -> Result<Bytes> {
        let mut state = self.state();
        state.calls.push(RecordedCall {
            to,
            input: input.clone(),
            opts: opts.clone(),
        });

        if let Some(err) = &state.call_error {
            return Err(err.clone());
        }

        // Unknown selectors behave like a call to an account without code.
        let output = input
            .get(..4)
            .and_then(|selector| state.responses.get(&Selector::from_slice(selector)))
            .cloned()
            .unwrap_or_default();
        Ok(output)
    }

    async fn code_at(&self, address: Address, _block: Option<BlockNumberOrTag>) -> Result<Bytes> {
        Ok(self.state().code.get(&address).cloned().unwrap_or_default())
    }
}

impl ContractTransactor for MockBackend {
    async fn send_transaction(
        &self,
        opts: &TransactOpts,
        to: Address,
        input: Bytes,
    ) -> Result<SentTransaction> {
        let mut state = self.state();
        if let Some(err) = &state.transact_error {
            return Err(err.clone());
        }

        let nonce = opts.nonce.unwrap_or(state.sent.len() as u64);
        let mut request = opts.to_request(to, input.clone());
        request.nonce = Some(nonce);

        let mut preimage = input.to_vec();
        preimage.extend_from_slice(&nonce.to_be_bytes());
        let hash = keccak256(preimage);

        if !opts.no_send {
            state.sent.push(request.clone());
        }

        Ok(SentTransaction {
            hash,
            request,
            raw: None,
        })
    }
}

impl ContractFilterer for MockBackend {
    async fn filter_logs(&self, query: &LogQuery) -> Result<Vec<Log>> {
        let mut state = self.state();
        state.queries.push(query.clone());

        Ok(state
            .logs
            .iter()
            .filter(|log| query.matches(log))
            .cloned()
            .collect())
    }

    async fn subscribe_logs(&self, query: &LogQuery) -> Result<LogSubscription> {
        let (sender, subscription) = LogSubscription::channel();
        self.state().subscribers.push((query.clone(), sender));
        Ok(subscription)
    }
}

/// Raw log carrying `event`, as emitted by `address` in `block`.
pub fn log_from_event<E: SolEvent>(address: Address, event: &E, block: u64) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address,
            data: event.encode_log_data(),
        },
        block_number: Some(block),
        ..Default::default()
    }
}
