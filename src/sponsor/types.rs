//! Sponsor service wire types and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network::Network;

/// Body of `POST /sponsored`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorRequest {
    pub network: Network,
    /// Base64 transaction-kind bytes.
    pub tx_bytes: String,
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_addresses: Option<Vec<String>>,
}

/// Response of `POST /sponsored`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SponsorResponse {
    /// Base64 full transaction bytes with sponsor gas attached.
    pub bytes: String,
    /// Reference digest used to finalize.
    pub digest: String,
}

/// Body of `POST /execute`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub digest: String,
    pub signature: String,
}

/// Errors talking to the sponsor service.
#[derive(Debug, Clone, Error)]
pub enum SponsorError {
    #[error("Invalid sponsor URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Sponsor request failed: {0}")]
    Transport(String),

    #[error("Sponsor returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode sponsor response: {0}")]
    Decode(String),
}

/// Result type for sponsor operations.
pub type SponsorResult<T> = Result<T, SponsorError>;
