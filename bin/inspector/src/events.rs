//! Historical and live event collection across every event of a contract.

use alloy_primitives::TxHash;
use alloy_sol_types::SolEvent;
use bind::{ContractFilterer, DecodedLog, FilterOpts, LogIterator, Subscription, WatchOpts};
use binding::{
    executor::ISuperDestinationExecutor as IExecutor, governor::ISuperGovernor as IGovernor,
};
use contracts::{SuperDestinationExecutorSimulations, SuperGovernor};
use std::fmt::{self, Debug};
use tokio::sync::mpsc;

/// Per-event buffer between a watch task and the shared record channel.
const RELAY_CAPACITY: usize = 64;

/// Contracts with events worth inspecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ContractKind {
    Executor,
    Governor,
}

impl ContractKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Executor => "executor",
            Self::Governor => "governor",
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded event flattened for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub contract: ContractKind,
    /// Event name without its parameter list
    pub event: &'static str,
    pub block_number: Option<u64>,
    pub log_index: Option<u64>,
    pub transaction_hash: Option<TxHash>,
    /// Debug rendering of the decoded fields
    pub details: String,
}

impl EventRecord {
    pub fn from_decoded<E: SolEvent + Debug>(contract: ContractKind, log: &DecodedLog<E>) -> Self {
        Self {
            contract,
            event: event_name::<E>(),
            block_number: log.block_number(),
            log_index: log.log_index(),
            transaction_hash: log.transaction_hash(),
            details: format!("{:?}", log.event),
        }
    }
}

/// `AddressSet(bytes32,address)` -> `AddressSet`
fn event_name<E: SolEvent>() -> &'static str {
    E::SIGNATURE
        .split_once('(')
        .map_or(E::SIGNATURE, |(name, _)| name)
}

async fn drain<E: SolEvent + Debug>(
    contract: ContractKind,
    iterator: LogIterator<E>,
) -> bind::Result<Vec<EventRecord>> {
    let logs = iterator.collect().await?;
    Ok(logs
        .iter()
        .map(|log| EventRecord::from_decoded(contract, log))
        .collect())
}

/// Chain order; pending logs without a position go last.
fn sort_records(records: &mut [EventRecord]) {
    records.sort_by_key(|record| {
        (
            record.block_number.unwrap_or(u64::MAX),
            record.log_index.unwrap_or(u64::MAX),
        )
    });
}

/// Every executor event in `opts`, in chain order.
pub async fn executor_events<C, T, F: ContractFilterer>(
    executor: &SuperDestinationExecutorSimulations<C, T, F>,
    opts: &FilterOpts,
) -> bind::Result<Vec<EventRecord>> {
    let kind = ContractKind::Executor;
    let mut records = Vec::new();

    records.extend(drain(kind, executor.filter_account_created(opts, &[]).await?).await?);
    records.extend(drain(kind, executor.filter_executed(opts, &[]).await?).await?);
    records.extend(
        drain(kind, executor.filter_invalid_intent_amount(opts, &[], &[]).await?).await?,
    );
    records.extend(drain(kind, executor.filter_mark_roots_as_used(opts, &[]).await?).await?);
    records.extend(drain(kind, executor.filter_received_but_no_hooks(opts, &[]).await?).await?);
    records.extend(
        drain(
            kind,
            executor
                .filter_received_but_not_enough_balance(opts, &[], &[])
                .await?,
        )
        .await?,
    );
    records.extend(
        drain(
            kind,
            executor
                .filter_received_but_root_used_already(opts, &[], &[])
                .await?,
        )
        .await?,
    );
    records.extend(
        drain(
            kind,
            executor
                .filter_super_position_mint_requested(opts, &[], &[], &[])
                .await?,
        )
        .await?,
    );

    sort_records(&mut records);
    Ok(records)
}

/// Every governor event in `opts`, in chain order.
pub async fn governor_events<C, T, F: ContractFilterer>(
    governor: &SuperGovernor<C, T, F>,
    opts: &FilterOpts,
) -> bind::Result<Vec<EventRecord>> {
    let kind = ContractKind::Governor;
    let mut records = Vec::new();

    records.extend(drain(kind, governor.filter_address_set(opts, &[], &[]).await?).await?);
    records.extend(drain(kind, governor.filter_fee_proposed(opts, &[]).await?).await?);
    records.extend(drain(kind, governor.filter_fee_updated(opts, &[]).await?).await?);
    records.extend(
        drain(
            kind,
            governor
                .filter_fulfill_requests_hook_registered(opts, &[])
                .await?,
        )
        .await?,
    );
    records.extend(
        drain(
            kind,
            governor
                .filter_fulfill_requests_hook_unregistered(opts, &[])
                .await?,
        )
        .await?,
    );
    records.extend(
        drain(
            kind,
            governor
                .filter_global_hooks_root_update_proposed(opts, &[])
                .await?,
        )
        .await?,
    );
    records.extend(
        drain(kind, governor.filter_global_hooks_root_updated(opts, &[]).await?).await?,
    );
    records.extend(
        drain(
            kind,
            governor
                .filter_global_hooks_root_veto_status_changed(opts, &[])
                .await?,
        )
        .await?,
    );
    records.extend(drain(kind, governor.filter_hook_approved(opts, &[]).await?).await?);
    records.extend(drain(kind, governor.filter_hook_removed(opts, &[]).await?).await?);
    records.extend(
        drain(kind, governor.filter_role_admin_changed(opts, &[], &[], &[]).await?).await?,
    );
    records.extend(drain(kind, governor.filter_role_granted(opts, &[], &[], &[]).await?).await?);
    records.extend(drain(kind, governor.filter_role_revoked(opts, &[], &[], &[]).await?).await?);

    sort_records(&mut records);
    Ok(records)
}

/// A running watch over one event.
#[derive(Debug)]
pub struct EventWatch {
    pub contract: ContractKind,
    pub event: &'static str,
    pub subscription: Subscription,
}

/// Typed sink whose decoded logs are flattened into `records`.
fn relay<E>(contract: ContractKind, records: mpsc::Sender<EventRecord>) -> mpsc::Sender<DecodedLog<E>>
where
    E: SolEvent + Debug + Send + Sync + 'static,
{
    let (sink, mut decoded) = mpsc::channel::<DecodedLog<E>>(RELAY_CAPACITY);
    tokio::spawn(async move {
        while let Some(log) = decoded.recv().await {
            if records
                .send(EventRecord::from_decoded(contract, &log))
                .await
                .is_err()
            {
                break;
            }
        }
    });
    sink
}

/// Subscribe to every event of `$contract`. Subscriptions opened before a
/// failing one are dropped, which stops them.
macro_rules! watch_all {
    (
        $contract:expr, $kind:expr, $opts:expr, $records:expr;
        $($event:ty => $watch:ident($($any:expr),*);)*
    ) => {
        vec![$(
            EventWatch {
                contract: $kind,
                event: event_name::<$event>(),
                subscription: $contract
                    .$watch($opts, relay::<$event>($kind, $records.clone()), $($any),*)
                    .await?,
            },
        )*]
    };
}

/// Watch every executor event, flattening each decoded log into `records`.
pub async fn watch_executor<C, T, F: ContractFilterer>(
    executor: &SuperDestinationExecutorSimulations<C, T, F>,
    opts: &WatchOpts,
    records: mpsc::Sender<EventRecord>,
) -> bind::Result<Vec<EventWatch>> {
    let kind = ContractKind::Executor;
    Ok(watch_all! {
        executor, kind, opts, records;
        IExecutor::AccountCreated => watch_account_created(&[]);
        IExecutor::SuperDestinationExecutorExecuted => watch_executed(&[]);
        IExecutor::SuperDestinationExecutorInvalidIntentAmount
            => watch_invalid_intent_amount(&[], &[]);
        IExecutor::SuperDestinationExecutorMarkRootsAsUsed => watch_mark_roots_as_used(&[]);
        IExecutor::SuperDestinationExecutorReceivedButNoHooks
            => watch_received_but_no_hooks(&[]);
        IExecutor::SuperDestinationExecutorReceivedButNotEnoughBalance
            => watch_received_but_not_enough_balance(&[], &[]);
        IExecutor::SuperDestinationExecutorReceivedButRootUsedAlready
            => watch_received_but_root_used_already(&[], &[]);
        IExecutor::SuperPositionMintRequested
            => watch_super_position_mint_requested(&[], &[], &[]);
    })
}

/// Watch every governor event, flattening each decoded log into `records`.
pub async fn watch_governor<C, T, F: ContractFilterer>(
    governor: &SuperGovernor<C, T, F>,
    opts: &WatchOpts,
    records: mpsc::Sender<EventRecord>,
) -> bind::Result<Vec<EventWatch>> {
    let kind = ContractKind::Governor;
    Ok(watch_all! {
        governor, kind, opts, records;
        IGovernor::AddressSet => watch_address_set(&[], &[]);
        IGovernor::FeeProposed => watch_fee_proposed(&[]);
        IGovernor::FeeUpdated => watch_fee_updated(&[]);
        IGovernor::FulfillRequestsHookRegistered => watch_fulfill_requests_hook_registered(&[]);
        IGovernor::FulfillRequestsHookUnregistered
            => watch_fulfill_requests_hook_unregistered(&[]);
        IGovernor::GlobalHooksRootUpdateProposed
            => watch_global_hooks_root_update_proposed(&[]);
        IGovernor::GlobalHooksRootUpdated => watch_global_hooks_root_updated(&[]);
        IGovernor::GlobalHooksRootVetoStatusChanged
            => watch_global_hooks_root_veto_status_changed(&[]);
        IGovernor::HookApproved => watch_hook_approved(&[]);
        IGovernor::HookRemoved => watch_hook_removed(&[]);
        IGovernor::RoleAdminChanged => watch_role_admin_changed(&[], &[], &[]);
        IGovernor::RoleGranted => watch_role_granted(&[], &[], &[]);
        IGovernor::RoleRevoked => watch_role_revoked(&[], &[], &[]);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_name() {
        assert_eq!(event_name::<IGovernor::AddressSet>(), "AddressSet");
        assert_eq!(
            event_name::<IExecutor::SuperPositionMintRequested>(),
            "SuperPositionMintRequested"
        );
    }

    #[test]
    fn test_sort_records() {
        let record = |block: Option<u64>, index: u64| EventRecord {
            contract: ContractKind::Governor,
            event: "HookApproved",
            block_number: block,
            log_index: Some(index),
            transaction_hash: None,
            details: String::new(),
        };
        let mut records = vec![
            record(None, 0),
            record(Some(9), 3),
            record(Some(9), 1),
            record(Some(2), 7),
        ];

        sort_records(&mut records);

        let order: Vec<_> = records
            .iter()
            .map(|r| (r.block_number, r.log_index))
            .collect();
        assert_eq!(
            order,
            vec![
                (Some(2), Some(7)),
                (Some(9), Some(1)),
                (Some(9), Some(3)),
                (None, Some(0)),
            ]
        );
    }
}
