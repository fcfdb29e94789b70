use crate::{
    spawn_watch, BindError, CallOpts, ContractCaller, ContractFilterer, ContractMetadata,
    ContractTransactor, DecodedLog, FilterOpts, LogIterator, LogQuery, LogSubscription, Result,
    SentTransaction, Subscription, TopicFilter, TransactOpts, WatchOpts,
};
use alloy_dyn_abi::{DecodedEvent, DynSolValue, EventExt, FunctionExt, JsonAbiExt};
use alloy_primitives::{Address, Bytes, B256};
use alloy_rpc_types_eth::Log;
use alloy_sol_types::{SolCall, SolEvent};
use tokio::sync::mpsc;
use tracing::debug;

/// A contract at a fixed address, bound to the capabilities used to reach it.
///
/// `C` performs read-only calls, `T` sends transactions and `F` queries
/// logs. Pass `()` for a capability the binding does not need; the
/// operations requiring it are then unavailable.
#[derive(Debug, Clone)]
pub struct BoundContract<C, T = C, F = C> {
    address: Address,
    metadata: &'static ContractMetadata,
    caller: C,
    transactor: T,
    filterer: F,
}

impl<B: Clone> BoundContract<B> {
    /// Bind all three capabilities to one backend.
    pub fn new(address: Address, metadata: &'static ContractMetadata, backend: B) -> Self {
        Self::from_parts(address, metadata, backend.clone(), backend.clone(), backend)
    }
}

impl<C, T, F> BoundContract<C, T, F> {
    pub const fn from_parts(
        address: Address,
        metadata: &'static ContractMetadata,
        caller: C,
        transactor: T,
        filterer: F,
    ) -> Self {
        Self {
            address,
            metadata,
            caller,
            transactor,
            filterer,
        }
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    pub const fn metadata(&self) -> &'static ContractMetadata {
        self.metadata
    }

    pub const fn caller(&self) -> &C {
        &self.caller
    }

    pub const fn transactor(&self) -> &T {
        &self.transactor
    }

    pub const fn filterer(&self) -> &F {
        &self.filterer
    }

    /// Decode `log` as event `E`.
    pub fn unpack_log<E: SolEvent>(&self, log: &Log) -> Result<DecodedLog<E>> {
        DecodedLog::decode(log.clone())
    }

    /// Decode `log` as the ABI event called `name`.
    pub fn unpack_log_by_name(&self, name: &str, log: &Log) -> Result<DecodedEvent> {
        let event = self.metadata.event(name)?;

        let Some(topic0) = log.topics().first() else {
            return Err(BindError::decoding(name, "no event signature"));
        };
        if *topic0 != event.selector() {
            return Err(BindError::decoding(
                name,
                format!("event signature mismatch: got {topic0}"),
            ));
        }

        event
            .decode_log(log.data())
            .map_err(|e| BindError::decoding(name, e))
    }
}

impl<C: ContractCaller, T, F> BoundContract<C, T, F> {
    /// Execute a read-only call and decode its return values.
    pub async fn call<K: SolCall>(&self, opts: &CallOpts, call: &K) -> Result<K::Return> {
        debug!(
            contract = self.metadata.name(),
            address = %self.address,
            method = K::SIGNATURE,
            block = ?opts.block,
            "Calling contract"
        );

        let output = self.invoke(opts, Bytes::from(call.abi_encode())).await?;
        K::abi_decode_returns(&output).map_err(|e| BindError::decoding(K::SIGNATURE, e))
    }

    /// Execute the ABI function called `name` with dynamically typed arguments.
    pub async fn call_method(
        &self,
        opts: &CallOpts,
        name: &str,
        args: &[DynSolValue],
    ) -> Result<Vec<DynSolValue>> {
        let function = self.metadata.function(name)?;
        let input = function
            .abi_encode_input(args)
            .map_err(|e| BindError::encoding(name, e))?;

        debug!(
            contract = self.metadata.name(),
            address = %self.address,
            method = %function.signature(),
            "Calling contract by name"
        );

        let output = self.invoke(opts, input.into()).await?;
        function
            .abi_decode_output(&output)
            .map_err(|e| BindError::decoding(name, e))
    }

    /// Empty return data from an address without code is reported as
    /// `NoCode` instead of a decoding error.
    async fn invoke(&self, opts: &CallOpts, input: Bytes) -> Result<Bytes> {
        let output = self.caller.call_contract(opts, self.address, input).await?;

        if output.is_empty() {
            let code = self.caller.code_at(self.address, opts.block).await?;
            if code.is_empty() {
                return Err(BindError::NoCode(self.address));
            }
        }

        Ok(output)
    }
}

impl<C, T: ContractTransactor, F> BoundContract<C, T, F> {
    /// Send a state-changing call.
    pub async fn transact<K: SolCall>(
        &self,
        opts: &TransactOpts,
        call: &K,
    ) -> Result<SentTransaction> {
        debug!(
            contract = self.metadata.name(),
            address = %self.address,
            method = K::SIGNATURE,
            "Sending transaction"
        );

        self.raw_transact(opts, call.abi_encode().into()).await
    }

    /// Send the ABI function called `name` with dynamically typed arguments.
    pub async fn transact_method(
        &self,
        opts: &TransactOpts,
        name: &str,
        args: &[DynSolValue],
    ) -> Result<SentTransaction> {
        let function = self.metadata.function(name)?;
        let input = function
            .abi_encode_input(args)
            .map_err(|e| BindError::encoding(name, e))?;

        debug!(
            contract = self.metadata.name(),
            address = %self.address,
            method = %function.signature(),
            "Sending transaction by name"
        );

        self.raw_transact(opts, input.into()).await
    }

    /// Send value with empty calldata, invoking the fallback or receive function.
    pub async fn transfer(&self, opts: &TransactOpts) -> Result<SentTransaction> {
        self.raw_transact(opts, Bytes::new()).await
    }

    /// Send a transaction with pre-encoded calldata.
    pub async fn raw_transact(&self, opts: &TransactOpts, input: Bytes) -> Result<SentTransaction> {
        let sent = self
            .transactor
            .send_transaction(opts, self.address, input)
            .await?;

        debug!(
            contract = self.metadata.name(),
            tx_hash = %sent.hash,
            no_send = opts.no_send,
            "Transaction ready"
        );
        Ok(sent)
    }
}

impl<C, T, F: ContractFilterer> BoundContract<C, T, F> {
    /// Historical logs of `E` matching `topics`.
    pub async fn filter_logs<E: SolEvent>(
        &self,
        opts: &FilterOpts,
        topics: TopicFilter,
    ) -> Result<LogIterator<E>> {
        let logs = self
            .query_logs(E::SIGNATURE, E::SIGNATURE_HASH, opts, topics)
            .await?;
        Ok(LogIterator::new(LogSubscription::from_logs(logs)))
    }

    /// Historical logs of the ABI event called `name`, undecoded.
    pub async fn filter_logs_by_name(
        &self,
        opts: &FilterOpts,
        name: &str,
        topics: TopicFilter,
    ) -> Result<LogSubscription> {
        let event = self.metadata.event(name)?;
        let logs = self
            .query_logs(name, event.selector(), opts, topics)
            .await?;
        Ok(LogSubscription::from_logs(logs))
    }

    /// Forward live logs of `E` matching `topics` to `sink` until the
    /// returned subscription is dropped.
    pub async fn watch_logs<E>(
        &self,
        opts: &WatchOpts,
        topics: TopicFilter,
        sink: mpsc::Sender<DecodedLog<E>>,
    ) -> Result<Subscription>
    where
        E: SolEvent + Send + Sync + 'static,
    {
        let query =
            LogQuery::new(self.address, E::SIGNATURE_HASH, topics).with_range(opts.start, None);

        debug!(
            contract = self.metadata.name(),
            address = %self.address,
            event = E::SIGNATURE,
            start = ?opts.start,
            "Watching logs"
        );

        let subscription = self.filterer.subscribe_logs(&query).await?;
        Ok(spawn_watch(subscription, sink))
    }

    async fn query_logs(
        &self,
        event: &str,
        signature: B256,
        opts: &FilterOpts,
        topics: TopicFilter,
    ) -> Result<Vec<Log>> {
        let query = LogQuery::new(self.address, signature, topics)
            .with_range(Some(opts.from_block), opts.to_block);

        let logs = self.filterer.filter_logs(&query).await?;

        debug!(
            contract = self.metadata.name(),
            address = %self.address,
            event,
            from_block = opts.from_block,
            to_block = ?opts.to_block,
            count = logs.len(),
            "Filtered logs"
        );
        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{log_from_event, MockBackend};
    use alloy_primitives::U256;
    use alloy_sol_types::{sol, sol_data, SolValue};

    sol! {
        #[derive(Debug, PartialEq, Eq)]
        function balanceOf(address account) external view returns (uint256);
        #[derive(Debug, PartialEq, Eq)]
        function deposit(uint256 amount) external;
        #[derive(Debug, PartialEq, Eq)]
        event Deposited(address indexed account, uint256 amount);
    }

    static METADATA: ContractMetadata = ContractMetadata::new(
        "Vault",
        r#"[
            {"type":"function","name":"balanceOf","inputs":[{"name":"account","type":"address"}],"outputs":[{"name":"","type":"uint256"}],"stateMutability":"view"},
            {"type":"function","name":"deposit","inputs":[{"name":"amount","type":"uint256"}],"outputs":[],"stateMutability":"nonpayable"},
            {"type":"event","name":"Deposited","inputs":[{"name":"account","type":"address","indexed":true},{"name":"amount","type":"uint256","indexed":false}],"anonymous":false}
        ]"#,
    );

    const VAULT: Address = Address::repeat_byte(0x11);

    fn deposited(account: Address, amount: u64, block: u64) -> Log {
        let event = Deposited {
            account,
            amount: U256::from(amount),
        };
        log_from_event(VAULT, &event, block)
    }

    #[tokio::test]
    async fn test_typed_call() {
        let backend = MockBackend::new();
        backend.on_call(balanceOfCall::SELECTOR, U256::from(42).abi_encode());
        let vault = BoundContract::new(VAULT, &METADATA, backend.clone());

        let balance = vault
            .call(
                &CallOpts::default(),
                &balanceOfCall {
                    account: Address::repeat_byte(1),
                },
            )
            .await
            .unwrap();

        assert_eq!(balance, U256::from(42));
        assert_eq!(backend.calls().len(), 1);
        assert_eq!(backend.calls()[0].to, VAULT);
    }

    #[tokio::test]
    async fn test_empty_output_without_code() {
        let vault = BoundContract::new(VAULT, &METADATA, MockBackend::new());

        let err = vault
            .call(
                &CallOpts::default(),
                &balanceOfCall {
                    account: Address::ZERO,
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, BindError::NoCode(VAULT));
    }

    #[tokio::test]
    async fn test_empty_output_with_code_is_decoding_error() {
        let backend = MockBackend::new().with_code(VAULT, vec![0x60, 0x80]);
        let vault = BoundContract::new(VAULT, &METADATA, backend);

        let err = vault
            .call(
                &CallOpts::default(),
                &balanceOfCall {
                    account: Address::ZERO,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, BindError::Decoding { .. }));
    }

    #[tokio::test]
    async fn test_call_method_matches_typed_encoding() {
        let backend = MockBackend::new();
        backend.on_call(balanceOfCall::SELECTOR, U256::from(7).abi_encode());
        let vault = BoundContract::new(VAULT, &METADATA, backend.clone());
        let account = Address::repeat_byte(0x42);

        let typed = vault
            .call(&CallOpts::default(), &balanceOfCall { account })
            .await
            .unwrap();
        let dynamic = vault
            .call_method(
                &CallOpts::default(),
                "balanceOf",
                &[DynSolValue::Address(account)],
            )
            .await
            .unwrap();

        assert_eq!(dynamic, vec![DynSolValue::Uint(typed, 256)]);
        let calls = backend.calls();
        assert_eq!(calls[0].input, calls[1].input);
    }

    #[tokio::test]
    async fn test_call_method_errors() {
        let vault = BoundContract::new(VAULT, &METADATA, MockBackend::new());

        let err = vault
            .call_method(&CallOpts::default(), "missing", &[])
            .await
            .unwrap_err();
        assert_eq!(err, BindError::UnknownMethod("missing".into()));

        let err = vault
            .call_method(&CallOpts::default(), "balanceOf", &[DynSolValue::Bool(true)])
            .await
            .unwrap_err();
        assert!(matches!(err, BindError::Encoding { .. }));
    }

    #[tokio::test]
    async fn test_transact_and_transfer() {
        let backend = MockBackend::new();
        let vault = BoundContract::new(VAULT, &METADATA, backend.clone());
        let opts = TransactOpts::sender(Address::repeat_byte(5));

        let call = depositCall {
            amount: U256::from(100),
        };
        let sent = vault.transact(&opts, &call).await.unwrap();
        vault
            .transfer(&opts.clone().with_value(U256::from(1)))
            .await
            .unwrap();

        let sent_requests = backend.sent();
        assert_eq!(sent_requests.len(), 2);
        assert_eq!(
            sent.request.input.input(),
            Some(&Bytes::from(call.abi_encode()))
        );
        assert_eq!(sent_requests[1].value, Some(U256::from(1)));
        assert_eq!(sent_requests[1].input.input(), Some(&Bytes::new()));
    }

    #[tokio::test]
    async fn test_no_send_is_not_broadcast() {
        let backend = MockBackend::new();
        let vault = BoundContract::new(VAULT, &METADATA, backend.clone());

        let sent = vault
            .transact_method(
                &TransactOpts::default().no_send(),
                "deposit",
                &[DynSolValue::Uint(U256::from(1), 256)],
            )
            .await
            .unwrap();

        assert!(backend.sent().is_empty());
        assert_eq!(
            sent.request.input.input(),
            Some(&Bytes::from(
                depositCall {
                    amount: U256::from(1)
                }
                .abi_encode()
            ))
        );
    }

    #[tokio::test]
    async fn test_filter_logs_by_indexed_account() {
        let a = Address::repeat_byte(0xaa);
        let b = Address::repeat_byte(0xbb);
        let backend = MockBackend::new();
        backend.push_log(deposited(a, 1, 10));
        backend.push_log(deposited(b, 2, 11));
        backend.push_log(deposited(a, 3, 12));
        let vault = BoundContract::new(VAULT, &METADATA, backend);

        let topics = TopicFilter::any().with::<sol_data::Address>(0, &[a]);
        let events = vault
            .filter_logs::<Deposited>(&FilterOpts::since(0), topics)
            .await
            .unwrap()
            .collect()
            .await
            .unwrap();

        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.account == a));

        let all = vault
            .filter_logs::<Deposited>(&FilterOpts::range(11, 12), TopicFilter::any())
            .await
            .unwrap()
            .collect()
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].block_number(), Some(11));
    }

    #[tokio::test]
    async fn test_unpack_log_by_name() {
        let vault = BoundContract::new(VAULT, &METADATA, MockBackend::new());
        let log = deposited(Address::repeat_byte(0xaa), 9, 1);

        let typed = vault.unpack_log::<Deposited>(&log).unwrap();
        let dynamic = vault.unpack_log_by_name("Deposited", &log).unwrap();

        assert_eq!(
            dynamic.indexed,
            vec![DynSolValue::Address(typed.account)]
        );
        assert_eq!(dynamic.body, vec![DynSolValue::Uint(typed.amount, 256)]);

        let err = vault
            .unpack_log_by_name("Deposited", &Log::default())
            .unwrap_err();
        assert!(err.to_string().contains("no event signature"));
    }

    #[tokio::test]
    async fn test_watch_logs() {
        let backend = MockBackend::new();
        let vault = BoundContract::new(VAULT, &METADATA, backend.clone());
        let (sink, mut events) = mpsc::channel(4);
        let a = Address::repeat_byte(0xaa);

        let topics = TopicFilter::any().with::<sol_data::Address>(0, &[a]);
        let watch = vault
            .watch_logs::<Deposited>(&WatchOpts::default(), topics, sink)
            .await
            .unwrap();

        backend.emit(deposited(Address::repeat_byte(0xbb), 1, 5));
        backend.emit(deposited(a, 2, 6));

        let event = events.recv().await.unwrap();
        assert_eq!(event.account, a);
        assert_eq!(event.amount, U256::from(2));

        drop(watch);
        assert!(events.recv().await.is_none());
        assert_eq!(backend.active_subscriptions(), 0);
    }

    #[tokio::test]
    async fn test_caller_only_binding() {
        let backend = MockBackend::new();
        backend.on_call(balanceOfCall::SELECTOR, U256::from(1).abi_encode());
        let vault = BoundContract::from_parts(VAULT, &METADATA, backend, (), ());

        assert!(vault
            .call(
                &CallOpts::default(),
                &balanceOfCall {
                    account: Address::ZERO
                }
            )
            .await
            .is_ok());
    }
}
