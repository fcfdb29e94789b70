//! Static ABI description for one contract.

use crate::{BindError, Result};
use alloy_json_abi::{Event, Function, JsonAbi};
use std::sync::OnceLock;

/// Raw ABI JSON for a contract plus its parse-once descriptor.
///
/// Instances are meant to live in `static`s next to the typed bindings:
///
/// ```ignore
/// pub static METADATA: ContractMetadata =
///     ContractMetadata::new("SuperGovernor", include_str!("../abi/SuperGovernor.json"));
/// ```
#[derive(Debug)]
pub struct ContractMetadata {
    name: &'static str,
    abi_json: &'static str,
    parsed: OnceLock<JsonAbi>,
}

impl ContractMetadata {
    pub const fn new(name: &'static str, abi_json: &'static str) -> Self {
        Self {
            name,
            abi_json,
            parsed: OnceLock::new(),
        }
    }

    /// Contract name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// ABI JSON exactly as embedded.
    pub const fn raw_abi(&self) -> &'static str {
        self.abi_json
    }

    /// Parsed ABI. The JSON is parsed on first use and cached for the
    /// process lifetime.
    pub fn abi(&self) -> Result<&JsonAbi> {
        if let Some(abi) = self.parsed.get() {
            return Ok(abi);
        }

        let abi: JsonAbi =
            serde_json::from_str(self.abi_json).map_err(|e| BindError::MalformedAbi {
                contract: self.name,
                reason: e.to_string(),
            })?;

        // A concurrent caller may have won the race; either value is identical.
        Ok(self.parsed.get_or_init(|| abi))
    }

    /// First function declared under `name`.
    pub fn function(&self, name: &str) -> Result<&Function> {
        self.abi()?
            .function(name)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| BindError::UnknownMethod(name.to_string()))
    }

    /// First event declared under `name`.
    pub fn event(&self, name: &str) -> Result<&Event> {
        self.abi()?
            .event(name)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| BindError::UnknownEvent(name.to_string()))
    }
}
