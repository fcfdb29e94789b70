use alloy_primitives::{address, Address, Bytes};
use alloy_sol_types::{SolCall, SolValue};
use bind::{testing::MockBackend, CallOpts, DynSolValue, TransactOpts};
use binding::signature::ISuperSignatureStorage::{retrieveSignatureDataCall, storeSignatureDataCall};
use contracts::SuperSignatureStorageOverride;

const STORAGE: Address = address!("0x3333333333333333333333333333333333333333");
const ACCOUNT: Address = address!("0x0000000000000000000000000000000000000abc");

#[tokio::test]
async fn test_retrieve_signature_data() {
    let signature = Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]);
    let backend = MockBackend::new();
    backend.on_call(
        retrieveSignatureDataCall::SELECTOR,
        (signature.clone(),).abi_encode_params(),
    );
    let storage = SuperSignatureStorageOverride::new(STORAGE, backend);

    let stored = storage
        .retrieve_signature_data(&CallOpts::default(), ACCOUNT)
        .await
        .unwrap();

    assert_eq!(stored, signature);
}

#[tokio::test]
async fn test_store_signature_session_matches_dynamic_encoding() {
    let signature = Bytes::from(vec![1, 2, 3]);
    let backend = MockBackend::new();
    let storage = SuperSignatureStorageOverride::new(STORAGE, backend.clone());

    let session = storage.session(CallOpts::default(), TransactOpts::sender(ACCOUNT).no_send());
    let typed = session
        .store_signature_data(signature.clone(), ACCOUNT)
        .await
        .unwrap();
    let dynamic = storage
        .bound()
        .transact_method(
            &TransactOpts::sender(ACCOUNT).no_send(),
            "storeSignatureData",
            &[
                DynSolValue::Bytes(signature.to_vec()),
                DynSolValue::Address(ACCOUNT),
            ],
        )
        .await
        .unwrap();

    assert_eq!(typed.request.input, dynamic.request.input);
    assert_eq!(
        typed.request.input.input(),
        Some(&Bytes::from(
            storeSignatureDataCall {
                signature,
                account: ACCOUNT
            }
            .abi_encode()
        ))
    );
    // Signed only.
    assert!(backend.sent().is_empty());
}
