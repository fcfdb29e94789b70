//! Indexed-argument filters and log queries.
//!
//! Topic 0 of a non-anonymous event is its signature hash. Up to three more
//! topics carry the indexed arguments, in declaration order. Each position
//! is OR-matched against a set of candidate values; an empty set matches
//! anything.

use alloy_primitives::{Address, B256};
use alloy_rpc_types_eth::{Filter, Log};
use alloy_sol_types::EventTopic;

/// Maximum number of indexed arguments an event can declare.
pub const MAX_INDEXED: usize = 3;

/// Encode a single indexed argument as a topic word.
pub fn encode_topic<T: EventTopic>(value: &T::RustType) -> B256 {
    T::encode_topic(value).0
}

/// Per-position candidate values for an event's indexed arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicFilter {
    positions: [Vec<B256>; MAX_INDEXED],
}

impl TopicFilter {
    /// Filter that matches every log of the event.
    pub fn any() -> Self {
        Self::default()
    }

    /// Restrict indexed argument `index` to `values`, encoded as `T`.
    ///
    /// # Panics
    /// If `index >= MAX_INDEXED`.
    pub fn with<T: EventTopic>(self, index: usize, values: &[T::RustType]) -> Self {
        let topics = values.iter().map(encode_topic::<T>).collect();
        self.with_topics(index, topics)
    }

    /// Restrict indexed argument `index` to already encoded topics.
    ///
    /// # Panics
    /// If `index >= MAX_INDEXED`.
    pub fn with_topics(mut self, index: usize, topics: Vec<B256>) -> Self {
        self.positions[index] = topics;
        self
    }

    /// Candidate values at `index`; empty means any.
    pub fn position(&self, index: usize) -> &[B256] {
        &self.positions[index]
    }

    /// Whether the indexed topics of a log (topic 0 excluded) pass the filter.
    pub fn matches(&self, indexed: &[B256]) -> bool {
        self.positions
            .iter()
            .enumerate()
            .all(|(i, candidates)| match indexed.get(i) {
                _ if candidates.is_empty() => true,
                Some(topic) => candidates.contains(topic),
                None => false,
            })
    }
}

/// A fully specified log query against one contract and event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub address: Address,
    pub event_signature: B256,
    pub topics: TopicFilter,
    pub from_block: Option<u64>,
    pub to_block: Option<u64>,
}

impl LogQuery {
    pub const fn new(address: Address, event_signature: B256, topics: TopicFilter) -> Self {
        Self {
            address,
            event_signature,
            topics,
            from_block: None,
            to_block: None,
        }
    }

    pub const fn with_range(mut self, from_block: Option<u64>, to_block: Option<u64>) -> Self {
        self.from_block = from_block;
        self.to_block = to_block;
        self
    }

    /// Equivalent `eth_getLogs` / `eth_newFilter` filter.
    pub fn to_filter(&self) -> Filter {
        let mut filter = Filter::new()
            .address(self.address)
            .event_signature(self.event_signature)
            .topic1(self.topics.position(0).to_vec())
            .topic2(self.topics.position(1).to_vec())
            .topic3(self.topics.position(2).to_vec());

        if let Some(from) = self.from_block {
            filter = filter.from_block(from);
        }
        if let Some(to) = self.to_block {
            filter = filter.to_block(to);
        }

        filter
    }

    /// Whether `log` would be returned by this query.
    pub fn matches(&self, log: &Log) -> bool {
        if log.address() != self.address {
            return false;
        }

        let topics = log.topics();
        match topics.split_first() {
            Some((topic0, indexed)) if *topic0 == self.event_signature => {
                if !self.topics.matches(indexed) {
                    return false;
                }
            }
            _ => return false,
        }

        match log.block_number {
            Some(block) => {
                self.from_block.is_none_or(|from| block >= from)
                    && self.to_block.is_none_or(|to| block <= to)
            }
            None => true,
        }
    }
}
