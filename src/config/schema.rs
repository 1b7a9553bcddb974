//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::network::{Network, NetworkVariables};

/// `[networks.<name>]` tables keyed by network name.
pub type NetworksConfig = BTreeMap<String, NetworkVariables>;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Network selected for this process.
    pub network: Network,

    /// Per-network package ids and named addresses.
    pub networks: NetworksConfig,

    /// Fullnode JSON-RPC settings.
    pub fullnode: FullnodeConfig,

    /// Sponsor service settings.
    pub sponsor: SponsorConfig,

    /// Transaction execution defaults.
    pub execution: ExecutionConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Fullnode JSON-RPC configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FullnodeConfig {
    /// JSON-RPC endpoint. Falls back to the selected network's public fullnode.
    pub rpc_url: Option<String>,

    /// Failover JSON-RPC endpoint URLs.
    pub failover_urls: Vec<String>,

    /// Per-request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Base delay between finality polls in milliseconds.
    pub poll_base_ms: u64,

    /// Maximum delay between finality polls in milliseconds.
    pub poll_max_ms: u64,

    /// Give up waiting for finality after this many seconds.
    pub finality_timeout_secs: u64,
}

impl Default for FullnodeConfig {
    fn default() -> Self {
        Self {
            rpc_url: None,
            failover_urls: Vec::new(),
            rpc_timeout_secs: 10,
            poll_base_ms: 200,
            poll_max_ms: 2000,
            finality_timeout_secs: 60,
        }
    }
}

impl FullnodeConfig {
    /// Endpoint to use for `network`, honouring an explicit override.
    pub fn endpoint_for(&self, network: Network) -> String {
        self.rpc_url
            .clone()
            .unwrap_or_else(|| network.fullnode_url().to_string())
    }
}

/// Sponsor service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SponsorConfig {
    /// Enable the sponsored execution path.
    pub enabled: bool,

    /// Base URL; `/sponsored` and `/execute` are appended.
    pub url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Addresses the sponsored transaction may touch, forwarded to the sponsor.
    pub allowed_addresses: Vec<String>,
}

impl Default for SponsorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: "http://localhost:3000/api".to_string(),
            timeout_secs: 30,
            allowed_addresses: Vec::new(),
        }
    }
}

/// Execution defaults applied to every transaction chain.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Wait for finality before firing `on_success`.
    pub wait_for_finality: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            wait_for_finality: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
