//! Chain and deployment configuration for the contract inspector.
//!
//! A config file lists one `[[chains]]` table per network:
//!
//! ```toml
//! [[chains]]
//! name = "base"
//! chain_id = 8453
//! rpc_url = "https://mainnet.base.org"
//!
//! [chains.deployments]
//! executor = "0x..."
//! governor = "0x..."
//! start_block = 30000000
//! ```

pub mod chain;

pub use chain::{ChainConfig, ChainConfigBuilder, Deployments};

use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`Config`]
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// No chain with the requested name
    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    /// Two chains share a name
    #[error("Duplicate chain name: {0}")]
    DuplicateChain(String),

    /// A chain entry is unusable
    #[error("Invalid config for chain {chain}: {reason}")]
    Invalid { chain: String, reason: String },
}

/// Top-level inspector configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configured chains
    #[serde(default)]
    pub chains: Vec<ChainConfig>,
}

impl Config {
    /// Load and validate a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        contents.parse()
    }

    /// Chain named `name`.
    pub fn chain(&self, name: &str) -> Result<&ChainConfig, ConfigError> {
        self.chains
            .iter()
            .find(|chain| chain.name == name)
            .ok_or_else(|| ConfigError::UnknownChain(name.to_string()))
    }

    /// Check every chain entry and reject duplicate names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        for chain in &self.chains {
            if !names.insert(chain.name.as_str()) {
                return Err(ConfigError::DuplicateChain(chain.name.clone()));
            }
            chain.validate()?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
