/*
[INPUT]:  Error sources (input validation, transport, server payloads, JSON decoding)
[OUTPUT]: Structured error types with preserved causes
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

use super::transport::TransportError;

pub const INVALID_BASE_CURRENCY: &str = "Invalid base currency";
pub const ERROR_JSON_DECODE_FAILED: &str = "Unable to decode the error JSON received from server";
pub const RATES_JSON_DECODE_FAILED: &str = "Unable to decode the FX rates JSON";

/// Main error type for the FX adapter
#[derive(Error, Debug)]
pub enum FxError {
    /// Caller supplied malformed input; no request was sent
    #[error("{0}")]
    InvalidInput(String),

    /// Server rejected the request with a structured error payload
    #[error("{message}")]
    Remote {
        code: i64,
        message: String,
        #[source]
        source: TransportError,
    },

    /// A response body did not match the expected JSON contract
    #[error("{message}")]
    Protocol {
        message: String,
        #[source]
        source: serde_json::Error,
        /// Transport failure whose body could not be decoded, if any
        transport: Option<TransportError>,
    },

    /// Request never reached the server
    #[error("Unable to connect to server. Check your network or firewall settings")]
    Connectivity(#[source] TransportError),

    /// Any other transport-level failure
    #[error("HTTP transport exception encountered")]
    Transport(#[source] TransportError),

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FxError {
    pub fn invalid_base_currency() -> Self {
        FxError::InvalidInput(INVALID_BASE_CURRENCY.to_string())
    }

    /// Server-provided error code, for remote errors
    pub fn code(&self) -> Option<i64> {
        match self {
            FxError::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, FxError::Remote { .. })
    }

    /// Whether a caller-level retry could plausibly succeed.
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FxError::Connectivity(_) | FxError::Transport(_))
    }
}

/// Result type alias for FX operations
pub type Result<T> = std::result::Result<T, FxError>;
