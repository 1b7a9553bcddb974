//! Network identifiers and per-network address sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Networks the scaffold knows how to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    #[default]
    Testnet,
    Devnet,
    Localnet,
}

impl Network {
    /// Every known network, in lookup order.
    pub const ALL: [Network; 4] = [
        Network::Mainnet,
        Network::Testnet,
        Network::Devnet,
        Network::Localnet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Localnet => "localnet",
        }
    }

    /// Public fullnode JSON-RPC endpoint.
    pub fn fullnode_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://fullnode.mainnet.sui.io:443",
            Network::Testnet => "https://fullnode.testnet.sui.io:443",
            Network::Devnet => "https://fullnode.devnet.sui.io:443",
            Network::Localnet => "http://127.0.0.1:9000",
        }
    }

    /// GraphQL endpoint for indexed queries.
    pub fn graphql_url(&self) -> String {
        match self {
            Network::Localnet => "http://127.0.0.1:9125/graphql".to_string(),
            other => format!("https://sui-{}.mystenlabs.com/graphql", other.as_str()),
        }
    }

    /// Chain identifier wallets expect when asked to sign.
    pub fn chain_identifier(&self) -> String {
        format!("sui:{}", self.as_str())
    }

    /// Environment variable that overrides the package id for this network.
    pub fn package_env_var(&self) -> &'static str {
        match self {
            Network::Mainnet => "MAINNET_PACKAGE_ID",
            Network::Testnet => "TESTNET_PACKAGE_ID",
            Network::Devnet => "DEVNET_PACKAGE_ID",
            Network::Localnet => "LOCALNET_PACKAGE_ID",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            "localnet" => Ok(Network::Localnet),
            other => Err(NetworkError::Unknown(other.to_string())),
        }
    }
}

/// Named on-chain addresses for one network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkVariables {
    /// Published package id.
    pub package: String,

    /// Additional named objects (shared objects, treasury caps, ...).
    pub addresses: BTreeMap<String, String>,
}

impl NetworkVariables {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            addresses: BTreeMap::new(),
        }
    }

    pub fn with_address(mut self, name: impl Into<String>, address: impl Into<String>) -> Self {
        self.addresses.insert(name.into(), address.into());
        self
    }

    /// Look up a named address.
    pub fn address(&self, name: &str) -> Option<&str> {
        self.addresses.get(name).map(String::as_str)
    }
}

/// Errors raised while resolving network configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Unknown network '{0}'")]
    Unknown(String),

    #[error("Network {0} is not configured")]
    NotConfigured(Network),

    #[error("Network {network} has an empty package id")]
    MissingPackage { network: Network },

    #[error("None of the candidate networks are configured: {0:?}")]
    NoCandidate(Vec<Network>),
}
