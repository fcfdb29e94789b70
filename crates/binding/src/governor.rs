//! SuperGovernor bindings.
//!
//! Central registry for the periphery: role based access control, the hook
//! registry, timelocked fee updates and the timelocked global hooks merkle
//! root.

use alloy_sol_types::sol;
use bind::ContractMetadata;

pub static METADATA: ContractMetadata =
    ContractMetadata::new("SuperGovernor", include_str!("../abi/SuperGovernor.json"));

sol! {
    /// SuperGovernor - governance and registry contract
    #[sol(all_derives, abi)]
    interface ISuperGovernor {
        /// Fee kinds governed by timelocked proposals
        enum FeeType {
            REVENUE_SHARE,
            PERFORMANCE_FEE_SHARE
        }

        /// Emitted when a registry key is set
        event AddressSet(bytes32 indexed key, address indexed value);

        /// Emitted when a fee change is proposed
        event FeeProposed(FeeType indexed feeType, uint256 value, uint256 effectiveTime);

        /// Emitted when a proposed fee takes effect
        event FeeUpdated(FeeType indexed feeType, uint256 value);

        event FulfillRequestsHookRegistered(address indexed hook);

        event FulfillRequestsHookUnregistered(address indexed hook);

        /// Emitted when a new global hooks root is proposed
        event GlobalHooksRootUpdateProposed(bytes32 indexed root, uint256 effectiveTime);

        /// Emitted when the proposed root becomes active
        event GlobalHooksRootUpdated(bytes32 indexed oldRoot, bytes32 newRoot);

        /// Emitted when the veto status of the global hooks root changes
        event GlobalHooksRootVetoStatusChanged(bool vetoed, bytes32 indexed root);

        event HookApproved(address indexed hook);

        event HookRemoved(address indexed hook);

        event RoleAdminChanged(
            bytes32 indexed role,
            bytes32 indexed previousAdminRole,
            bytes32 indexed newAdminRole
        );

        event RoleGranted(bytes32 indexed role, address indexed account, address indexed sender);

        event RoleRevoked(bytes32 indexed role, address indexed account, address indexed sender);

        error AccessControlBadConfirmation();
        error AccessControlUnauthorizedAccount(address account, bytes32 neededRole);
        error FEE_NOT_PROPOSED();
        error HOOK_ALREADY_APPROVED();
        error HOOK_NOT_APPROVED();
        error INVALID_ADDRESS();
        error INVALID_FEE_VALUE();
        error NO_PROPOSED_ROOT();
        error ROOT_VETOED();
        error TIMELOCK_NOT_EXPIRED();

        function BANK_MANAGER_ROLE() external view returns (bytes32);
        function DEFAULT_ADMIN_ROLE() external view returns (bytes32);
        function GOVERNOR_ROLE() external view returns (bytes32);
        function SUPER_GOVERNOR_ROLE() external view returns (bytes32);

        /// Delay between a proposal and its execution, in seconds
        function TIMELOCK() external view returns (uint256);

        /// Apply a proposed fee once its timelock expired
        function executeFeeUpdate(FeeType feeType) external;

        /// Apply the proposed global hooks root once its timelock expired
        function executeGlobalHooksRootUpdate() external;

        /// Registry lookup
        function getAddress(bytes32 key) external view returns (address);

        function getFee(FeeType feeType) external view returns (uint256);

        function getGlobalHooksRoot() external view returns (bytes32 root);

        function getProposedFee(FeeType feeType)
            external view returns (uint256 value, uint256 effectiveTime);

        function getProposedGlobalHooksRoot()
            external view returns (bytes32 root, uint256 effectiveTime);

        function getRegisteredFulfillRequestsHooks() external view returns (address[] memory);

        function getRegisteredHooks() external view returns (address[] memory);

        function getRoleAdmin(bytes32 role) external view returns (bytes32);

        function grantRole(bytes32 role, address account) external;

        function hasRole(bytes32 role, address account) external view returns (bool);

        function isFulfillRequestsHookRegistered(address hook) external view returns (bool);

        function isGlobalHooksRootVetoed() external view returns (bool vetoed);

        function isHookRegistered(address hook) external view returns (bool);

        /// Start the timelock for a new fee value
        function proposeFee(FeeType feeType, uint256 value) external;

        /// Start the timelock for a new global hooks root
        function proposeGlobalHooksRoot(bytes32 newRoot) external;

        function registerHook(address hook, bool isFulfillRequestsHook) external;

        function renounceRole(bytes32 role, address callerConfirmation) external;

        function revokeRole(bytes32 role, address account) external;

        function setAddress(bytes32 key, address value) external;

        function setGlobalHooksRootVetoStatus(bool vetoed) external;

        function supportsInterface(bytes4 interfaceId) external view returns (bool);

        function unregisterHook(address hook, bool isFulfillRequestsHook) external;
    }
}
