//! Typed facade for SuperGovernor.

use alloy_primitives::{Address, FixedBytes, B256, U256};
use alloy_sol_types::sol_data;
use binding::governor::{ISuperGovernor::*, METADATA};

contract_facade! {
    /// Governance and registry contract: roles, hooks, fees and the global
    /// hooks root.
    pub struct SuperGovernor;
    metadata: METADATA;
    caller: SuperGovernorCaller;
    transactor: SuperGovernorTransactor;
    filterer: SuperGovernorFilterer;
    session: SuperGovernorSession;
    caller_session: SuperGovernorCallerSession;
    transactor_session: SuperGovernorTransactorSession;
}

calls! {
    SuperGovernor;

    fn bank_manager_role() -> B256 => BANK_MANAGER_ROLECall {};

    fn default_admin_role() -> B256 => DEFAULT_ADMIN_ROLECall {};

    fn governor_role() -> B256 => GOVERNOR_ROLECall {};

    fn super_governor_role() -> B256 => SUPER_GOVERNOR_ROLECall {};

    /// Delay between a proposal and its execution, in seconds.
    fn timelock() -> U256 => TIMELOCKCall {};

    /// Registry lookup; zero when `key` was never set.
    fn get_address(key: B256) -> Address => getAddressCall { key: key };

    fn get_fee(fee_type: FeeType) -> U256 => getFeeCall { feeType: fee_type };

    fn get_global_hooks_root() -> B256 => getGlobalHooksRootCall {};

    /// Pending fee value and the time it can be executed.
    fn get_proposed_fee(fee_type: FeeType) -> getProposedFeeReturn
        => getProposedFeeCall { feeType: fee_type };

    /// Pending global hooks root and the time it can be executed.
    fn get_proposed_global_hooks_root() -> getProposedGlobalHooksRootReturn
        => getProposedGlobalHooksRootCall {};

    fn get_registered_fulfill_requests_hooks() -> Vec<Address>
        => getRegisteredFulfillRequestsHooksCall {};

    fn get_registered_hooks() -> Vec<Address> => getRegisteredHooksCall {};

    fn get_role_admin(role: B256) -> B256 => getRoleAdminCall { role: role };

    fn has_role(role: B256, account: Address) -> bool
        => hasRoleCall { role: role, account: account };

    fn is_fulfill_requests_hook_registered(hook: Address) -> bool
        => isFulfillRequestsHookRegisteredCall { hook: hook };

    fn is_global_hooks_root_vetoed() -> bool => isGlobalHooksRootVetoedCall {};

    fn is_hook_registered(hook: Address) -> bool => isHookRegisteredCall { hook: hook };

    fn supports_interface(interface_id: FixedBytes<4>) -> bool
        => supportsInterfaceCall { interfaceId: interface_id };
}

transactions! {
    SuperGovernor;

    /// Apply a proposed fee once its timelock expired.
    fn execute_fee_update(fee_type: FeeType) => executeFeeUpdateCall { feeType: fee_type };

    /// Apply the proposed global hooks root once its timelock expired.
    fn execute_global_hooks_root_update() => executeGlobalHooksRootUpdateCall {};

    fn grant_role(role: B256, account: Address)
        => grantRoleCall { role: role, account: account };

    /// Start the timelock for a new fee value.
    fn propose_fee(fee_type: FeeType, value: U256)
        => proposeFeeCall { feeType: fee_type, value: value };

    /// Start the timelock for a new global hooks root.
    fn propose_global_hooks_root(new_root: B256)
        => proposeGlobalHooksRootCall { newRoot: new_root };

    fn register_hook(hook: Address, is_fulfill_requests_hook: bool)
        => registerHookCall { hook: hook, isFulfillRequestsHook: is_fulfill_requests_hook };

    /// `caller_confirmation` must be the sender.
    fn renounce_role(role: B256, caller_confirmation: Address)
        => renounceRoleCall { role: role, callerConfirmation: caller_confirmation };

    fn revoke_role(role: B256, account: Address)
        => revokeRoleCall { role: role, account: account };

    fn set_address(key: B256, value: Address) => setAddressCall { key: key, value: value };

    fn set_global_hooks_root_veto_status(vetoed: bool)
        => setGlobalHooksRootVetoStatusCall { vetoed: vetoed };

    fn unregister_hook(hook: Address, is_fulfill_requests_hook: bool)
        => unregisterHookCall { hook: hook, isFulfillRequestsHook: is_fulfill_requests_hook };
}

events! {
    SuperGovernor;

    AddressSet => AddressSetIterator {
        filter: filter_address_set,
        watch: watch_address_set,
        parse: parse_address_set,
        indexed: [0 => key: sol_data::FixedBytes<32>, 1 => value: sol_data::Address],
    }

    FeeProposed => FeeProposedIterator {
        filter: filter_fee_proposed,
        watch: watch_fee_proposed,
        parse: parse_fee_proposed,
        indexed: [0 => fee_type: FeeType],
    }

    FeeUpdated => FeeUpdatedIterator {
        filter: filter_fee_updated,
        watch: watch_fee_updated,
        parse: parse_fee_updated,
        indexed: [0 => fee_type: FeeType],
    }

    FulfillRequestsHookRegistered => FulfillRequestsHookRegisteredIterator {
        filter: filter_fulfill_requests_hook_registered,
        watch: watch_fulfill_requests_hook_registered,
        parse: parse_fulfill_requests_hook_registered,
        indexed: [0 => hook: sol_data::Address],
    }

    FulfillRequestsHookUnregistered => FulfillRequestsHookUnregisteredIterator {
        filter: filter_fulfill_requests_hook_unregistered,
        watch: watch_fulfill_requests_hook_unregistered,
        parse: parse_fulfill_requests_hook_unregistered,
        indexed: [0 => hook: sol_data::Address],
    }

    GlobalHooksRootUpdateProposed => GlobalHooksRootUpdateProposedIterator {
        filter: filter_global_hooks_root_update_proposed,
        watch: watch_global_hooks_root_update_proposed,
        parse: parse_global_hooks_root_update_proposed,
        indexed: [0 => root: sol_data::FixedBytes<32>],
    }

    GlobalHooksRootUpdated => GlobalHooksRootUpdatedIterator {
        filter: filter_global_hooks_root_updated,
        watch: watch_global_hooks_root_updated,
        parse: parse_global_hooks_root_updated,
        indexed: [0 => old_root: sol_data::FixedBytes<32>],
    }

    GlobalHooksRootVetoStatusChanged => GlobalHooksRootVetoStatusChangedIterator {
        filter: filter_global_hooks_root_veto_status_changed,
        watch: watch_global_hooks_root_veto_status_changed,
        parse: parse_global_hooks_root_veto_status_changed,
        indexed: [0 => root: sol_data::FixedBytes<32>],
    }

    HookApproved => HookApprovedIterator {
        filter: filter_hook_approved,
        watch: watch_hook_approved,
        parse: parse_hook_approved,
        indexed: [0 => hook: sol_data::Address],
    }

    HookRemoved => HookRemovedIterator {
        filter: filter_hook_removed,
        watch: watch_hook_removed,
        parse: parse_hook_removed,
        indexed: [0 => hook: sol_data::Address],
    }

    RoleAdminChanged => RoleAdminChangedIterator {
        filter: filter_role_admin_changed,
        watch: watch_role_admin_changed,
        parse: parse_role_admin_changed,
        indexed: [
            0 => role: sol_data::FixedBytes<32>,
            1 => previous_admin_role: sol_data::FixedBytes<32>,
            2 => new_admin_role: sol_data::FixedBytes<32>
        ],
    }

    RoleGranted => RoleGrantedIterator {
        filter: filter_role_granted,
        watch: watch_role_granted,
        parse: parse_role_granted,
        indexed: [
            0 => role: sol_data::FixedBytes<32>,
            1 => account: sol_data::Address,
            2 => sender: sol_data::Address
        ],
    }

    RoleRevoked => RoleRevokedIterator {
        filter: filter_role_revoked,
        watch: watch_role_revoked,
        parse: parse_role_revoked,
        indexed: [
            0 => role: sol_data::FixedBytes<32>,
            1 => account: sol_data::Address,
            2 => sender: sol_data::Address
        ],
    }
}
