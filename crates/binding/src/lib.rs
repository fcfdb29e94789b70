//! Contract bindings for the Superform periphery contracts.
//!
//! Each module pairs a `sol!` interface with the contract's ABI JSON:
//! - SuperDestinationExecutorSimulations (destination-chain executor module)
//! - SuperGovernor (roles, hook registry, fees, global hooks root)
//! - SuperSignatureStorageOverride (per-account signature storage)
//!
//! The typed interfaces are generated using alloy's `sol!` macro. The JSON
//! is embedded as [`bind::ContractMetadata`] for by-name access and must
//! describe the same selectors.

pub mod executor;
pub mod governor;
pub mod signature;
