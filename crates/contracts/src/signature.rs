//! Typed facade for SuperSignatureStorageOverride.

use alloy_primitives::{Address, Bytes};
use binding::signature::{ISuperSignatureStorage::*, METADATA};

contract_facade! {
    /// Per-account signature storage used during user operation validation.
    pub struct SuperSignatureStorageOverride;
    metadata: METADATA;
    caller: SuperSignatureStorageOverrideCaller;
    transactor: SuperSignatureStorageOverrideTransactor;
    filterer: SuperSignatureStorageOverrideFilterer;
    session: SuperSignatureStorageOverrideSession;
    caller_session: SuperSignatureStorageOverrideCallerSession;
    transactor_session: SuperSignatureStorageOverrideTransactorSession;
}

calls! {
    SuperSignatureStorageOverride;

    /// Signature stored for `account`, empty when none was stored.
    fn retrieve_signature_data(account: Address) -> Bytes
        => retrieveSignatureDataCall { account: account };
}

transactions! {
    SuperSignatureStorageOverride;

    fn store_signature_data(signature: Bytes, account: Address)
        => storeSignatureDataCall { signature: signature, account: account };
}
