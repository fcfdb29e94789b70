//! Per-chain endpoint and deployment settings.

use crate::ConfigError;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default `eth_getLogs` window, in blocks.
pub const DEFAULT_MAX_BLOCK_RANGE: u64 = 9_500;

/// Default live filter poll interval, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 4_000;

const fn default_max_block_range() -> u64 {
    DEFAULT_MAX_BLOCK_RANGE
}

const fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

/// One network the inspector can talk to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Name used to select the chain on the command line
    pub name: String,
    /// Expected chain ID, checked on connect
    pub chain_id: u64,
    /// JSON-RPC endpoint url
    pub rpc_url: String,
    /// Largest block range per `eth_getLogs` request
    #[serde(default = "default_max_block_range")]
    pub max_block_range: u64,
    /// Live log filter poll interval
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default)]
    pub deployments: Deployments,
}

/// Contract addresses deployed on a chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployments {
    /// SuperDestinationExecutor (or its simulations variant)
    pub executor: Option<Address>,
    /// SuperGovernor
    pub governor: Option<Address>,
    /// SuperSignatureStorage
    pub signature_storage: Option<Address>,
    /// First block worth scanning for events
    #[serde(default)]
    pub start_block: u64,
}

impl ChainConfig {
    pub fn builder(
        name: impl Into<String>,
        chain_id: u64,
        rpc_url: impl Into<String>,
    ) -> ChainConfigBuilder {
        ChainConfigBuilder {
            config: Self {
                name: name.into(),
                chain_id,
                rpc_url: rpc_url.into(),
                max_block_range: DEFAULT_MAX_BLOCK_RANGE,
                poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
                deployments: Deployments::default(),
            },
        }
    }

    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::Invalid {
            chain: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.is_empty() {
            return Err(invalid("empty name"));
        }
        if self.rpc_url.is_empty() {
            return Err(invalid("empty rpc_url"));
        }
        if self.max_block_range == 0 {
            return Err(invalid("max_block_range must be positive"));
        }
        if self.poll_interval_ms == 0 {
            return Err(invalid("poll_interval_ms must be positive"));
        }
        for (contract, address) in [
            ("executor", self.deployments.executor),
            ("governor", self.deployments.governor),
            ("signature_storage", self.deployments.signature_storage),
        ] {
            if address == Some(Address::ZERO) {
                return Err(invalid(&format!("{contract} address is zero")));
            }
        }
        Ok(())
    }
}

/// Builder for programmatic chain configs.
#[derive(Debug, Clone)]
pub struct ChainConfigBuilder {
    config: ChainConfig,
}

impl ChainConfigBuilder {
    pub const fn max_block_range(mut self, max_block_range: u64) -> Self {
        self.config.max_block_range = max_block_range;
        self
    }

    pub const fn poll_interval_ms(mut self, poll_interval_ms: u64) -> Self {
        self.config.poll_interval_ms = poll_interval_ms;
        self
    }

    pub const fn executor(mut self, address: Address) -> Self {
        self.config.deployments.executor = Some(address);
        self
    }

    pub const fn governor(mut self, address: Address) -> Self {
        self.config.deployments.governor = Some(address);
        self
    }

    pub const fn signature_storage(mut self, address: Address) -> Self {
        self.config.deployments.signature_storage = Some(address);
        self
    }

    pub const fn start_block(mut self, start_block: u64) -> Self {
        self.config.deployments.start_block = start_block;
        self
    }

    pub fn build(self) -> ChainConfig {
        self.config
    }
}
