//! SuperSignatureStorageOverride bindings.

use alloy_sol_types::sol;
use bind::ContractMetadata;

pub static METADATA: ContractMetadata = ContractMetadata::new(
    "SuperSignatureStorageOverride",
    include_str!("../abi/SuperSignatureStorageOverride.json"),
);

sol! {
    /// Stores a user operation signature per account for later retrieval
    /// during validation
    #[sol(all_derives, abi)]
    interface ISuperSignatureStorage {
        error INVALID_USER_OP();

        /// Signature stored for `account`, empty when none
        function retrieveSignatureData(address account) external view returns (bytes memory);

        function storeSignatureData(bytes calldata signature, address account) external;
    }
}
