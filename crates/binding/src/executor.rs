//! SuperDestinationExecutor bindings (simulation build).
//!
//! ERC-7579 executor module that runs bridged executions on the destination
//! chain once the bridged funds have arrived.

use alloy_sol_types::sol;
use bind::ContractMetadata;

pub static METADATA: ContractMetadata = ContractMetadata::new(
    "SuperDestinationExecutorSimulations",
    include_str!("../abi/SuperDestinationExecutorSimulations.json"),
);

sol! {
    /// SuperDestinationExecutor - executes bridged intents for smart accounts
    #[sol(all_derives, abi)]
    #[allow(clippy::too_many_arguments)]
    interface ISuperDestinationExecutor {
        /// Call produced by a hook
        struct Execution {
            address target;
            uint256 value;
            bytes callData;
        }

        /// Emitted when an account is deployed from bridged init data
        event AccountCreated(address indexed account, bytes32 salt);

        /// Emitted when a bridged execution ran
        event SuperDestinationExecutorExecuted(address indexed account);

        /// Emitted when an intent amount is zero or otherwise unusable
        event SuperDestinationExecutorInvalidIntentAmount(
            address indexed account,
            address indexed token,
            uint256 intentAmount
        );

        /// Emitted when merkle roots are marked as used
        event SuperDestinationExecutorMarkRootsAsUsed(address indexed account, bytes32[] roots);

        /// Emitted when funds arrived but the calldata carried no hooks
        event SuperDestinationExecutorReceivedButNoHooks(address indexed account);

        /// Emitted when the account does not yet hold the full intent amount
        event SuperDestinationExecutorReceivedButNotEnoughBalance(
            address indexed account,
            address indexed token,
            uint256 intentAmount,
            uint256 available
        );

        /// Emitted when the signed merkle root was already consumed
        event SuperDestinationExecutorReceivedButRootUsedAlready(
            address indexed account,
            bytes32 indexed root
        );

        /// Emitted when a SuperPosition mint is requested on another chain
        event SuperPositionMintRequested(
            address indexed account,
            address indexed spToken,
            uint256 amount,
            uint256 indexed dstChainId
        );

        error ACCOUNT_NOT_CREATED();
        error ADDRESS_NOT_ACCOUNT();
        error ADDRESS_NOT_VALID();
        error ALREADY_INITIALIZED();
        error ARRAY_LENGTH_MISMATCH();
        error FEE_NOT_TRANSFERRED();
        error INSUFFICIENT_BALANCE_FOR_FEE();
        error INVALID_ACCOUNT();
        error INVALID_CALLER();
        error INVALID_CHAIN_ID();
        error INVALID_FEE();
        error INVALID_SIGNATURE();
        error INVALID_YIELD_SOURCE_ORACLE_ID();
        error LENGTH_MISMATCH();
        error MALICIOUS_HOOK_DETECTED();
        error MANAGER_NOT_SET();
        error MERKLE_ROOT_ALREADY_USED();
        error NOT_AUTHORIZED();
        error NOT_INITIALIZED();
        error NO_HOOKS();
        error ReentrancyGuardReentrantCall();
        error SENDER_CREATOR_NOT_VALID();

        /// Validator that checks destination signatures
        function SUPER_DESTINATION_VALIDATOR() external view returns (address);

        /// Execute hooks encoded in `data` for the calling account
        function execute(bytes calldata data) external;

        /// Whether the module is installed on `account`
        function isInitialized(address account) external view returns (bool);

        /// Whether `user` already consumed `merkleRoot`
        function isMerkleRootUsed(address user, bytes32 merkleRoot) external view returns (bool);

        /// ERC-7579 module type check
        function isModuleType(uint256 typeId) external pure returns (bool);

        /// Ledger configuration contract
        function ledgerConfiguration() external view returns (address);

        /// Mark merkle roots as used for the calling account
        function markRootsAsUsed(bytes32[] calldata roots) external;

        function name() external pure returns (string memory);

        function onInstall(bytes calldata) external;

        function onUninstall(bytes calldata) external;

        /// Entry point called by the bridge adapter once funds arrived
        function processBridgedExecution(
            address,
            address account,
            address[] memory dstTokens,
            uint256[] memory intentAmounts,
            bytes memory initData,
            bytes memory executorCalldata,
            bytes memory userSignatureData
        ) external;

        /// Raw storage getter for consumed merkle roots
        function usedMerkleRoots(address user, bytes32 merkleRoot) external view returns (bool used);

        /// Executions a hook would produce, rejected if non-compliant
        function validateHookCompliance(
            address hook,
            address prevHook,
            address account,
            bytes calldata hookData
        ) external view returns (Execution[] memory);

        function version() external pure returns (string memory);
    }

    /// Errors raised by the ERC-7579 module base. Separate interface:
    /// `NotInitialized` and `NOT_INITIALIZED` map to the same generated name.
    #[sol(all_derives, abi)]
    interface IERC7579Module {
        error ModuleAlreadyInitialized(address smartAccount);
        error NotInitialized(address smartAccount);
    }
}
