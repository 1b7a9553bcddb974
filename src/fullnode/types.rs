//! Fullnode JSON-RPC envelope and error definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to a fullnode.
#[derive(Debug, Clone, Error)]
pub enum FullnodeError {
    /// Endpoint URL failed to parse.
    #[error("Invalid RPC URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport failure or non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The node answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Response body did not match the expected shape.
    #[error("Failed to decode RPC response: {0}")]
    Decode(String),

    /// Every configured endpoint failed or timed out.
    #[error("All RPC providers failed for {0}")]
    AllProvidersFailed(String),

    /// Transaction did not become visible before the deadline.
    #[error("Transaction {digest} not final after {secs} seconds")]
    FinalityTimeout { digest: String, secs: u64 },
}

impl FullnodeError {
    /// Whether this error means "the node does not know this transaction (yet)".
    pub fn is_not_found(&self) -> bool {
        match self {
            FullnodeError::Rpc { message, .. } => {
                let message = message.to_ascii_lowercase();
                message.contains("could not find") || message.contains("not found")
            }
            _ => false,
        }
    }
}

/// Result type for fullnode operations.
pub type FullnodeResult<T> = Result<T, FullnodeError>;

#[derive(Debug, Serialize)]
pub(crate) struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: &'a Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
}
