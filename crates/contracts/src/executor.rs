//! Typed facade for SuperDestinationExecutorSimulations.

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::sol_data;
use binding::executor::{ISuperDestinationExecutor::*, METADATA};

contract_facade! {
    /// Destination-chain executor module.
    ///
    /// ```ignore
    /// let executor = SuperDestinationExecutorSimulations::new(address, backend);
    /// let installed = executor.is_initialized(&CallOpts::default(), account).await?;
    /// ```
    pub struct SuperDestinationExecutorSimulations;
    metadata: METADATA;
    caller: SuperDestinationExecutorSimulationsCaller;
    transactor: SuperDestinationExecutorSimulationsTransactor;
    filterer: SuperDestinationExecutorSimulationsFilterer;
    session: SuperDestinationExecutorSimulationsSession;
    caller_session: SuperDestinationExecutorSimulationsCallerSession;
    transactor_session: SuperDestinationExecutorSimulationsTransactorSession;
}

calls! {
    SuperDestinationExecutorSimulations;

    /// Validator that checks destination signatures.
    fn super_destination_validator() -> Address => SUPER_DESTINATION_VALIDATORCall {};

    /// Whether the module is installed on `account`.
    fn is_initialized(account: Address) -> bool => isInitializedCall { account: account };

    fn is_merkle_root_used(user: Address, merkle_root: B256) -> bool
        => isMerkleRootUsedCall { user: user, merkleRoot: merkle_root };

    fn is_module_type(type_id: U256) -> bool => isModuleTypeCall { typeId: type_id };

    fn ledger_configuration() -> Address => ledgerConfigurationCall {};

    fn name() -> String => nameCall {};

    fn used_merkle_roots(user: Address, merkle_root: B256) -> bool
        => usedMerkleRootsCall { user: user, merkleRoot: merkle_root };

    /// Executions `hook` would produce for `account`. Reverts for
    /// non-compliant hooks.
    fn validate_hook_compliance(
        hook: Address,
        prev_hook: Address,
        account: Address,
        hook_data: Bytes
    ) -> Vec<Execution>
        => validateHookComplianceCall {
            hook: hook,
            prevHook: prev_hook,
            account: account,
            hookData: hook_data
        };

    fn version() -> String => versionCall {};
}

transactions! {
    SuperDestinationExecutorSimulations;

    fn execute(data: Bytes) => executeCall { data: data };

    fn mark_roots_as_used(roots: Vec<B256>) => markRootsAsUsedCall { roots: roots };

    fn on_install(data: Bytes) => onInstallCall(data);

    fn on_uninstall(data: Bytes) => onUninstallCall(data);

    /// Entry point used by bridge adapters once the bridged funds arrived.
    fn process_bridged_execution(
        token: Address,
        account: Address,
        dst_tokens: Vec<Address>,
        intent_amounts: Vec<U256>,
        init_data: Bytes,
        executor_calldata: Bytes,
        user_signature_data: Bytes
    ) => processBridgedExecutionCall {
        _0: token,
        account: account,
        dstTokens: dst_tokens,
        intentAmounts: intent_amounts,
        initData: init_data,
        executorCalldata: executor_calldata,
        userSignatureData: user_signature_data
    };
}

events! {
    SuperDestinationExecutorSimulations;

    AccountCreated => AccountCreatedIterator {
        filter: filter_account_created,
        watch: watch_account_created,
        parse: parse_account_created,
        indexed: [0 => account: sol_data::Address],
    }

    SuperDestinationExecutorExecuted => ExecutedIterator {
        filter: filter_executed,
        watch: watch_executed,
        parse: parse_executed,
        indexed: [0 => account: sol_data::Address],
    }

    SuperDestinationExecutorInvalidIntentAmount => InvalidIntentAmountIterator {
        filter: filter_invalid_intent_amount,
        watch: watch_invalid_intent_amount,
        parse: parse_invalid_intent_amount,
        indexed: [0 => account: sol_data::Address, 1 => token: sol_data::Address],
    }

    SuperDestinationExecutorMarkRootsAsUsed => MarkRootsAsUsedIterator {
        filter: filter_mark_roots_as_used,
        watch: watch_mark_roots_as_used,
        parse: parse_mark_roots_as_used,
        indexed: [0 => account: sol_data::Address],
    }

    SuperDestinationExecutorReceivedButNoHooks => ReceivedButNoHooksIterator {
        filter: filter_received_but_no_hooks,
        watch: watch_received_but_no_hooks,
        parse: parse_received_but_no_hooks,
        indexed: [0 => account: sol_data::Address],
    }

    SuperDestinationExecutorReceivedButNotEnoughBalance => ReceivedButNotEnoughBalanceIterator {
        filter: filter_received_but_not_enough_balance,
        watch: watch_received_but_not_enough_balance,
        parse: parse_received_but_not_enough_balance,
        indexed: [0 => account: sol_data::Address, 1 => token: sol_data::Address],
    }

    SuperDestinationExecutorReceivedButRootUsedAlready => ReceivedButRootUsedAlreadyIterator {
        filter: filter_received_but_root_used_already,
        watch: watch_received_but_root_used_already,
        parse: parse_received_but_root_used_already,
        indexed: [0 => account: sol_data::Address, 1 => root: sol_data::FixedBytes<32>],
    }

    SuperPositionMintRequested => SuperPositionMintRequestedIterator {
        filter: filter_super_position_mint_requested,
        watch: watch_super_position_mint_requested,
        parse: parse_super_position_mint_requested,
        indexed: [
            0 => account: sol_data::Address,
            1 => sp_token: sol_data::Address,
            2 => dst_chain_id: sol_data::Uint<256>
        ],
    }
}
