//! Point-in-time snapshots of contract state.

use alloy_primitives::{Address, B256, U256};
use bind::{CallOpts, ContractCaller};
use binding::governor::ISuperGovernor::FeeType;
use contracts::{SuperDestinationExecutorSimulations, SuperGovernor};

/// Executor module state for one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorStatus {
    pub account: Address,
    /// Whether the module is installed on `account`
    pub initialized: bool,
    pub name: String,
    pub version: String,
    pub ledger_configuration: Address,
    pub destination_validator: Address,
}

pub async fn executor_status<C: ContractCaller, T, F>(
    executor: &SuperDestinationExecutorSimulations<C, T, F>,
    opts: CallOpts,
    account: Address,
) -> bind::Result<ExecutorStatus> {
    let executor = executor.caller_session(opts);

    let (initialized, name, version, ledger_configuration, destination_validator) = tokio::try_join!(
        executor.is_initialized(account),
        executor.name(),
        executor.version(),
        executor.ledger_configuration(),
        executor.super_destination_validator(),
    )?;

    Ok(ExecutorStatus {
        account,
        initialized,
        name,
        version,
        ledger_configuration,
        destination_validator,
    })
}

/// Registration state of a single hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookStatus {
    pub hook: Address,
    pub registered: bool,
    pub fulfill_requests: bool,
}

/// Governor hook and fee state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovernorStatus {
    pub hooks_root: B256,
    /// Pending root, zero when nothing is proposed
    pub proposed_root: B256,
    /// Unix time from which the pending root can be executed
    pub proposed_root_effective_time: U256,
    pub root_vetoed: bool,
    pub timelock: U256,
    pub registered_hooks: Vec<Address>,
    pub fulfill_requests_hooks: Vec<Address>,
    pub revenue_share: U256,
    pub performance_fee_share: U256,
    pub hook: Option<HookStatus>,
}

pub async fn governor_status<C: ContractCaller, T, F>(
    governor: &SuperGovernor<C, T, F>,
    opts: CallOpts,
    hook: Option<Address>,
) -> bind::Result<GovernorStatus> {
    let governor = governor.caller_session(opts);

    let (hooks_root, proposed, root_vetoed, timelock) = tokio::try_join!(
        governor.get_global_hooks_root(),
        governor.get_proposed_global_hooks_root(),
        governor.is_global_hooks_root_vetoed(),
        governor.timelock(),
    )?;

    let (registered_hooks, fulfill_requests_hooks, revenue_share, performance_fee_share) = tokio::try_join!(
        governor.get_registered_hooks(),
        governor.get_registered_fulfill_requests_hooks(),
        governor.get_fee(FeeType::REVENUE_SHARE),
        governor.get_fee(FeeType::PERFORMANCE_FEE_SHARE),
    )?;

    let hook = match hook {
        Some(hook) => {
            let (registered, fulfill_requests) = tokio::try_join!(
                governor.is_hook_registered(hook),
                governor.is_fulfill_requests_hook_registered(hook),
            )?;
            Some(HookStatus {
                hook,
                registered,
                fulfill_requests,
            })
        }
        None => None,
    };

    Ok(GovernorStatus {
        hooks_root,
        proposed_root: proposed.root,
        proposed_root_effective_time: proposed.effectiveTime,
        root_vetoed,
        timelock,
        registered_hooks,
        fulfill_requests_hooks,
        revenue_share,
        performance_fee_share,
        hook,
    })
}
