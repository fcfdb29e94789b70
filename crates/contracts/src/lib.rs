//! Typed facades over the Superform periphery contracts.
//!
//! Every facade wraps a [`bind::BoundContract`] and comes in three role
//! flavours (`Caller`, `Transactor`, `Filterer`) plus sessions that carry
//! pre-set options:
//!
//! ```ignore
//! let governor = SuperGovernor::new(address, backend);
//! let session = governor.caller_session(CallOpts::at_block(19_000_000));
//! let root = session.get_global_hooks_root().await?;
//! ```

#[macro_use]
mod macros;

pub mod executor;
pub mod governor;
mod session;
pub mod signature;

pub use executor::{
    SuperDestinationExecutorSimulations, SuperDestinationExecutorSimulationsCaller,
    SuperDestinationExecutorSimulationsCallerSession, SuperDestinationExecutorSimulationsFilterer,
    SuperDestinationExecutorSimulationsSession, SuperDestinationExecutorSimulationsTransactor,
    SuperDestinationExecutorSimulationsTransactorSession,
};
pub use governor::{
    SuperGovernor, SuperGovernorCaller, SuperGovernorCallerSession, SuperGovernorFilterer,
    SuperGovernorSession, SuperGovernorTransactor, SuperGovernorTransactorSession,
};
pub use session::Session;
pub use signature::{
    SuperSignatureStorageOverride, SuperSignatureStorageOverrideCaller,
    SuperSignatureStorageOverrideCallerSession, SuperSignatureStorageOverrideFilterer,
    SuperSignatureStorageOverrideSession, SuperSignatureStorageOverrideTransactor,
    SuperSignatureStorageOverrideTransactorSession,
};
