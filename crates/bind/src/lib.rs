//! Generic machinery behind the typed contract bindings.
//!
//! A [`BoundContract`] pairs a contract address and its [`ContractMetadata`]
//! with up to three capabilities ([`ContractCaller`], [`ContractTransactor`],
//! [`ContractFilterer`]). Typed facades encode arguments with `sol!`
//! generated types and delegate every operation here.

mod backend;
mod contract;
mod error;
mod iterator;
mod log;
mod metadata;
mod opts;
mod topics;
mod watch;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use backend::{
    ContractCaller, ContractFilterer, ContractTransactor, LogSender, LogSubscription,
    SentTransaction,
};
pub use contract::BoundContract;
pub use error::{BindError, Result};
pub use iterator::LogIterator;
pub use log::DecodedLog;
pub use metadata::ContractMetadata;
pub use opts::{CallOpts, FilterOpts, TransactOpts, WatchOpts};
pub use topics::{encode_topic, LogQuery, TopicFilter, MAX_INDEXED};
pub use watch::{spawn_watch, Subscription};

pub use alloy_dyn_abi::{DecodedEvent, DynSolValue};
