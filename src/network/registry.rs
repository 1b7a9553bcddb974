//! Static network → address lookup, validated once at startup.

use std::collections::BTreeMap;

use crate::config::schema::NetworksConfig;
use crate::network::types::{Network, NetworkError, NetworkVariables};

/// Immutable mapping from network to its named addresses.
#[derive(Debug, Clone, Default)]
pub struct NetworkRegistry {
    entries: BTreeMap<Network, NetworkVariables>,
}

impl NetworkRegistry {
    /// Build the registry from the `[networks.*]` config tables.
    ///
    /// Package ids may be overridden per network through the process
    /// environment (`TESTNET_PACKAGE_ID` and friends).
    pub fn from_config(config: &NetworksConfig) -> Result<Self, NetworkError> {
        Self::from_config_with_env(config, |key| std::env::var(key).ok())
    }

    /// Same as [`NetworkRegistry::from_config`] with an explicit environment lookup.
    pub fn from_config_with_env<F>(config: &NetworksConfig, env: F) -> Result<Self, NetworkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut entries = BTreeMap::new();
        for (name, vars) in config {
            let network: Network = name.parse()?;
            entries.insert(network, vars.clone());
        }

        for network in Network::ALL {
            if let Some(package) = env(network.package_env_var()).filter(|p| !p.trim().is_empty()) {
                tracing::debug!(%network, "Package id overridden from environment");
                entries
                    .entry(network)
                    .or_insert_with(NetworkVariables::default)
                    .package = package;
            }
        }

        let registry = Self { entries };
        registry.validate()?;
        Ok(registry)
    }

    /// Insert or replace one network's variables.
    pub fn with_network(mut self, network: Network, vars: NetworkVariables) -> Self {
        self.entries.insert(network, vars);
        self
    }

    fn validate(&self) -> Result<(), NetworkError> {
        for (network, vars) in &self.entries {
            if vars.package.trim().is_empty() {
                return Err(NetworkError::MissingPackage { network: *network });
            }
        }
        Ok(())
    }

    /// Look up the address set for a network.
    pub fn lookup(&self, network: Network) -> Result<&NetworkVariables, NetworkError> {
        self.entries
            .get(&network)
            .ok_or(NetworkError::NotConfigured(network))
    }

    /// Return the first configured network from an ordered candidate list.
    pub fn resolve(&self, candidates: &[Network]) -> Result<(Network, &NetworkVariables), NetworkError> {
        candidates
            .iter()
            .find_map(|n| self.entries.get(n).map(|vars| (*n, vars)))
            .ok_or_else(|| NetworkError::NoCandidate(candidates.to_vec()))
    }

    pub fn networks(&self) -> impl Iterator<Item = (&Network, &NetworkVariables)> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> NetworksConfig {
        let mut networks = NetworksConfig::new();
        networks.insert(
            "testnet".to_string(),
            NetworkVariables::new("0xtest").with_address("Game", "0xgame"),
        );
        networks
    }

    #[test]
    fn test_lookup_configured_network() {
        let registry = NetworkRegistry::from_config_with_env(&config(), |_| None).unwrap();
        let vars = registry.lookup(Network::Testnet).unwrap();
        assert_eq!(vars.package, "0xtest");
        assert_eq!(
            registry.lookup(Network::Mainnet),
            Err(NetworkError::NotConfigured(Network::Mainnet))
        );
    }

    #[test]
    fn test_env_override_adds_network() {
        let registry = NetworkRegistry::from_config_with_env(&config(), |key| {
            (key == "MAINNET_PACKAGE_ID").then(|| "0xmain".to_string())
        })
        .unwrap();
        assert_eq!(registry.lookup(Network::Mainnet).unwrap().package, "0xmain");
        assert_eq!(registry.lookup(Network::Testnet).unwrap().package, "0xtest");
    }

    #[test]
    fn test_resolve_uses_candidate_order() {
        let registry = NetworkRegistry::from_config_with_env(&config(), |_| None).unwrap();
        let (network, vars) = registry
            .resolve(&[Network::Mainnet, Network::Testnet])
            .unwrap();
        assert_eq!(network, Network::Testnet);
        assert_eq!(vars.package, "0xtest");

        assert!(matches!(
            registry.resolve(&[Network::Devnet]),
            Err(NetworkError::NoCandidate(_))
        ));
    }

    #[test]
    fn test_empty_package_rejected() {
        let mut networks = NetworksConfig::new();
        networks.insert("devnet".to_string(), NetworkVariables::default());
        let err = NetworkRegistry::from_config_with_env(&networks, |_| None).unwrap_err();
        assert_eq!(err, NetworkError::MissingPackage { network: Network::Devnet });
    }

    #[test]
    fn test_unknown_network_key_rejected() {
        let mut networks = NetworksConfig::new();
        networks.insert("moonnet".to_string(), NetworkVariables::new("0x1"));
        assert!(matches!(
            NetworkRegistry::from_config_with_env(&networks, |_| None),
            Err(NetworkError::Unknown(_))
        ));
    }
}
