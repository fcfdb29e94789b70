use crate::{BindError, Result};
use alloy_primitives::{Address, TxHash};
use alloy_rpc_types_eth::Log;
use alloy_sol_types::SolEvent;
use std::ops::Deref;

/// A decoded event together with the raw log it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLog<E> {
    /// Decoded event fields
    pub event: E,
    /// Raw log, kept for provenance (block, transaction, index)
    pub raw: Log,
}

impl<E: SolEvent> DecodedLog<E> {
    /// Decode `raw` as event `E`.
    ///
    /// Indexed fields come from topics 1..n, the rest from the data section.
    /// Topic 0 must be the event signature hash.
    pub fn decode(raw: Log) -> Result<Self> {
        let Some(topic0) = raw.topics().first() else {
            return Err(BindError::decoding(E::SIGNATURE, "no event signature"));
        };
        if *topic0 != E::SIGNATURE_HASH {
            return Err(BindError::decoding(
                E::SIGNATURE,
                format!("event signature mismatch: got {topic0}"),
            ));
        }

        let event = E::decode_log_data(raw.data()).map_err(|e| BindError::decoding(E::SIGNATURE, e))?;

        Ok(Self { event, raw })
    }
}

impl<E> DecodedLog<E> {
    /// Emitting contract.
    pub const fn address(&self) -> Address {
        self.raw.inner.address
    }

    pub const fn block_number(&self) -> Option<u64> {
        self.raw.block_number
    }

    pub const fn transaction_hash(&self) -> Option<TxHash> {
        self.raw.transaction_hash
    }

    pub const fn log_index(&self) -> Option<u64> {
        self.raw.log_index
    }

    pub fn into_event(self) -> E {
        self.event
    }
}

impl<E> Deref for DecodedLog<E> {
    type Target = E;

    fn deref(&self) -> &E {
        &self.event
    }
}
