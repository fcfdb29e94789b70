use alloy_primitives::Address;
use thiserror::Error;

/// Errors surfaced by bound contracts.
///
/// None of these are retried at this layer; transient failures are the
/// transport's concern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The embedded ABI JSON could not be parsed
    #[error("malformed ABI for {contract}: {reason}")]
    MalformedAbi {
        contract: &'static str,
        reason: String,
    },

    /// No function with this name in the ABI
    #[error("method `{0}` not found in ABI")]
    UnknownMethod(String),

    /// No event with this name in the ABI
    #[error("event `{0}` not found in ABI")]
    UnknownEvent(String),

    /// Arguments did not match the ABI input shape
    #[error("failed to encode arguments for `{method}`: {reason}")]
    Encoding { method: String, reason: String },

    /// Response or log did not match the ABI output shape
    #[error("failed to decode `{target}`: {reason}")]
    Decoding { target: String, reason: String },

    /// RPC or network failure reported by the transport
    #[error("transport error: {0}")]
    Transport(String),

    /// The transactor could not sign the transaction
    #[error("signing error: {0}")]
    Signing(String),

    /// A call returned no data and the target has no code
    #[error("no contract code at {0}")]
    NoCode(Address),

    /// A log subscription terminated with an error
    #[error("subscription error: {0}")]
    Subscription(String),
}

impl BindError {
    pub(crate) fn decoding(target: impl Into<String>, reason: impl ToString) -> Self {
        Self::Decoding {
            target: target.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn encoding(method: impl Into<String>, reason: impl ToString) -> Self {
        Self::Encoding {
            method: method.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T, E = BindError> = std::result::Result<T, E>;
