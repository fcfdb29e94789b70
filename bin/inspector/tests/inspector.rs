use alloy_primitives::{address, b256, Address, B256, U256};
use alloy_sol_types::{SolCall, SolValue};
use bind::{
    testing::{log_from_event, MockBackend},
    BindError, CallOpts, FilterOpts, WatchOpts,
};
use binding::{
    executor::ISuperDestinationExecutor as IExecutor,
    governor::ISuperGovernor::{self as IGovernor, FeeType},
};
use contracts::{SuperDestinationExecutorSimulations, SuperGovernor};
use inspector::{
    executor_events, executor_status, governor_events, governor_status, run_watches,
    watch_governor, ContractKind, Metrics,
};
use tokio::sync::mpsc;

const EXECUTOR: Address = address!("0x1111111111111111111111111111111111111111");
const GOVERNOR: Address = address!("0x2222222222222222222222222222222222222222");
const ACCOUNT: Address = address!("0x0000000000000000000000000000000000000abc");
const HOOK: Address = address!("0x00000000000000000000000000000000000000f1");
const ROOT: B256 = b256!("0x1111111111111111111111111111111111111111111111111111111111111111");

#[tokio::test]
async fn test_executor_status() {
    let ledger = Address::repeat_byte(0x1e);
    let validator = Address::repeat_byte(0x7a);
    let backend = MockBackend::new();
    backend.on_call(IExecutor::isInitializedCall::SELECTOR, true.abi_encode());
    backend.on_call(
        IExecutor::nameCall::SELECTOR,
        ("SuperDestinationExecutor".to_string(),).abi_encode_params(),
    );
    backend.on_call(
        IExecutor::versionCall::SELECTOR,
        ("0.0.1".to_string(),).abi_encode_params(),
    );
    backend.on_call(
        IExecutor::ledgerConfigurationCall::SELECTOR,
        ledger.abi_encode(),
    );
    backend.on_call(
        IExecutor::SUPER_DESTINATION_VALIDATORCall::SELECTOR,
        validator.abi_encode(),
    );
    let executor = SuperDestinationExecutorSimulations::new_caller(EXECUTOR, backend.clone());

    let status = executor_status(&executor, CallOpts::at_block(100), ACCOUNT)
        .await
        .unwrap();

    assert!(status.initialized);
    assert_eq!(status.account, ACCOUNT);
    assert_eq!(status.name, "SuperDestinationExecutor");
    assert_eq!(status.version, "0.0.1");
    assert_eq!(status.ledger_configuration, ledger);
    assert_eq!(status.destination_validator, validator);
    assert!(backend
        .calls()
        .iter()
        .all(|call| call.opts == CallOpts::at_block(100)));
}

#[tokio::test]
async fn test_executor_status_propagates_call_error() {
    let backend = MockBackend::new();
    backend.fail_calls(BindError::Transport("connection refused".into()));
    let executor = SuperDestinationExecutorSimulations::new_caller(EXECUTOR, backend);

    let err = executor_status(&executor, CallOpts::default(), ACCOUNT)
        .await
        .unwrap_err();
    assert!(matches!(err, BindError::Transport(_)));
}

#[tokio::test]
async fn test_governor_status_with_hook() {
    let backend = MockBackend::new();
    backend.on_call(IGovernor::getGlobalHooksRootCall::SELECTOR, ROOT.abi_encode());
    backend.on_call(
        IGovernor::getProposedGlobalHooksRootCall::SELECTOR,
        (B256::repeat_byte(2), U256::from(1_700_000_000u64)).abi_encode_params(),
    );
    backend.on_call(
        IGovernor::isGlobalHooksRootVetoedCall::SELECTOR,
        false.abi_encode(),
    );
    backend.on_call(IGovernor::TIMELOCKCall::SELECTOR, U256::from(86_400).abi_encode());
    backend.on_call(
        IGovernor::getRegisteredHooksCall::SELECTOR,
        (vec![HOOK],).abi_encode_params(),
    );
    backend.on_call(
        IGovernor::getRegisteredFulfillRequestsHooksCall::SELECTOR,
        (Vec::<Address>::new(),).abi_encode_params(),
    );
    backend.on_call(IGovernor::getFeeCall::SELECTOR, U256::from(1_000).abi_encode());
    backend.on_call(IGovernor::isHookRegisteredCall::SELECTOR, true.abi_encode());
    backend.on_call(
        IGovernor::isFulfillRequestsHookRegisteredCall::SELECTOR,
        false.abi_encode(),
    );
    let governor = SuperGovernor::new_caller(GOVERNOR, backend);

    let status = governor_status(&governor, CallOpts::default(), Some(HOOK))
        .await
        .unwrap();

    assert_eq!(status.hooks_root, ROOT);
    assert_eq!(status.proposed_root, B256::repeat_byte(2));
    assert_eq!(
        status.proposed_root_effective_time,
        U256::from(1_700_000_000u64)
    );
    assert!(!status.root_vetoed);
    assert_eq!(status.timelock, U256::from(86_400));
    assert_eq!(status.registered_hooks, vec![HOOK]);
    assert!(status.fulfill_requests_hooks.is_empty());
    assert_eq!(status.revenue_share, U256::from(1_000));
    let hook = status.hook.unwrap();
    assert!(hook.registered);
    assert!(!hook.fulfill_requests);
}

#[tokio::test]
async fn test_governor_events_in_chain_order() {
    let backend = MockBackend::new();
    backend.push_log(log_from_event(
        GOVERNOR,
        &IGovernor::HookApproved { hook: HOOK },
        12,
    ));
    backend.push_log(log_from_event(
        GOVERNOR,
        &IGovernor::FeeUpdated {
            feeType: FeeType::REVENUE_SHARE,
            value: U256::from(500),
        },
        7,
    ));
    // Another contract's log is not reported.
    backend.push_log(log_from_event(
        EXECUTOR,
        &IGovernor::HookRemoved { hook: HOOK },
        9,
    ));
    let governor = SuperGovernor::new_filterer(GOVERNOR, backend.clone());

    let records = governor_events(&governor, &FilterOpts::since(0))
        .await
        .unwrap();

    let events: Vec<_> = records.iter().map(|r| (r.event, r.block_number)).collect();
    assert_eq!(
        events,
        vec![("FeeUpdated", Some(7)), ("HookApproved", Some(12))]
    );
    assert!(records.iter().all(|r| r.contract == ContractKind::Governor));
    // One query per governor event.
    assert_eq!(backend.queries().len(), 13);
}

#[tokio::test]
async fn test_executor_events_respect_range() {
    let backend = MockBackend::new();
    for block in [5, 50] {
        backend.push_log(log_from_event(
            EXECUTOR,
            &IExecutor::SuperDestinationExecutorExecuted { account: ACCOUNT },
            block,
        ));
    }
    let executor = SuperDestinationExecutorSimulations::new_filterer(EXECUTOR, backend);

    let records = executor_events(&executor, &FilterOpts::range(10, 100))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].event, "SuperDestinationExecutorExecuted");
    assert_eq!(records[0].block_number, Some(50));
}

#[tokio::test]
async fn test_run_watches_until_subscriptions_complete() {
    let backend = MockBackend::new();
    let governor = SuperGovernor::new_filterer(GOVERNOR, backend.clone());
    let (records_tx, records_rx) = mpsc::channel(16);

    let watches = watch_governor(&governor, &WatchOpts::default(), records_tx)
        .await
        .unwrap();
    assert_eq!(watches.len(), 13);
    assert_eq!(backend.active_subscriptions(), 13);

    let delivered = backend.emit(log_from_event(
        GOVERNOR,
        &IGovernor::GlobalHooksRootUpdated {
            oldRoot: B256::ZERO,
            newRoot: ROOT,
        },
        20,
    ));
    assert_eq!(delivered, 1);
    backend.close_subscriptions();

    let received = run_watches(
        watches,
        records_rx,
        &Metrics::new(),
        std::future::pending(),
    )
    .await;
    assert_eq!(received, 1);
}

#[tokio::test]
async fn test_run_watches_stops_on_shutdown() {
    let backend = MockBackend::new();
    let governor = SuperGovernor::new_filterer(GOVERNOR, backend.clone());
    let (records_tx, records_rx) = mpsc::channel(16);
    let watches = watch_governor(&governor, &WatchOpts::default(), records_tx)
        .await
        .unwrap();

    let received = run_watches(watches, records_rx, &Metrics::new(), async {}).await;

    assert_eq!(received, 0);
    // Unsubscribed watches close their log subscriptions.
    assert_eq!(backend.emit(log_from_event(
        GOVERNOR,
        &IGovernor::HookApproved { hook: HOOK },
        21,
    )), 0);
}
