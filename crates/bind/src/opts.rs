//! Per-operation options passed to bound contracts.

use alloy_primitives::{Address, Bytes, TxKind, U256};
use alloy_rpc_types_eth::{BlockNumberOrTag, TransactionInput, TransactionRequest};

/// Options for read-only calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOpts {
    /// Optional sender of the call
    pub from: Option<Address>,
    /// Block to execute against (latest when unset)
    pub block: Option<BlockNumberOrTag>,
}

impl CallOpts {
    /// Execute against the pending state.
    pub const fn pending() -> Self {
        Self {
            from: None,
            block: Some(BlockNumberOrTag::Pending),
        }
    }

    /// Execute against a specific block.
    pub const fn at_block(block: u64) -> Self {
        Self {
            from: None,
            block: Some(BlockNumberOrTag::Number(block)),
        }
    }

    pub const fn with_from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }
}

/// Options for state-changing transactions.
///
/// Unset fields are filled by the transactor (nonce, gas, fees).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactOpts {
    /// Sender account
    pub from: Option<Address>,
    /// Explicit nonce
    pub nonce: Option<u64>,
    /// Wei sent along with the call
    pub value: Option<U256>,
    /// Gas limit
    pub gas_limit: Option<u64>,
    /// EIP-1559 max fee per gas
    pub max_fee_per_gas: Option<u128>,
    /// EIP-1559 priority fee per gas
    pub max_priority_fee_per_gas: Option<u128>,
    /// Sign the transaction but do not broadcast it
    pub no_send: bool,
}

impl TransactOpts {
    pub const fn sender(from: Address) -> Self {
        Self {
            from: Some(from),
            nonce: None,
            value: None,
            gas_limit: None,
            max_fee_per_gas: None,
            max_priority_fee_per_gas: None,
            no_send: false,
        }
    }

    pub const fn with_value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    pub const fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    pub const fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    pub const fn no_send(mut self) -> Self {
        self.no_send = true;
        self
    }

    /// Build the transaction request for a call to `to` with `input`.
    pub fn to_request(&self, to: Address, input: Bytes) -> TransactionRequest {
        TransactionRequest {
            from: self.from,
            to: Some(TxKind::Call(to)),
            input: TransactionInput::new(input),
            value: self.value,
            nonce: self.nonce,
            gas: self.gas_limit,
            max_fee_per_gas: self.max_fee_per_gas,
            max_priority_fee_per_gas: self.max_priority_fee_per_gas,
            ..Default::default()
        }
    }
}

/// Options for historical log queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOpts {
    /// First block to scan
    pub from_block: u64,
    /// Last block to scan (latest when unset)
    pub to_block: Option<u64>,
}

impl FilterOpts {
    pub const fn range(from_block: u64, to_block: u64) -> Self {
        Self {
            from_block,
            to_block: Some(to_block),
        }
    }

    pub const fn since(from_block: u64) -> Self {
        Self {
            from_block,
            to_block: None,
        }
    }
}

/// Options for live log subscriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchOpts {
    /// Block to start watching from (new blocks only when unset)
    pub start: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transact_request() {
        let from = Address::repeat_byte(1);
        let to = Address::repeat_byte(2);
        let opts = TransactOpts::sender(from)
            .with_value(U256::from(7))
            .with_gas_limit(21_000);

        let request = opts.to_request(to, Bytes::from(vec![0xde, 0xad]));

        assert_eq!(request.from, Some(from));
        assert_eq!(request.to, Some(TxKind::Call(to)));
        assert_eq!(request.value, Some(U256::from(7)));
        assert_eq!(request.gas, Some(21_000));
        assert_eq!(request.input.input(), Some(&Bytes::from(vec![0xde, 0xad])));
        assert!(request.nonce.is_none());
    }
}
