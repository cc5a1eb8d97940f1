use crate::{
    errors::CustomError,
    models::network_config::{NativeAsset, NetworkDescriptor},
};

/// Immutable table of the networks every scan covers.
///
/// Built once at startup and shared read-only (behind an `Arc`) by all
/// fetchers. Iteration order is registration order.
#[derive(Clone, Debug)]
pub struct NetworkRegistry {
    networks: Vec<NetworkDescriptor>,
}

impl NetworkRegistry {
    pub fn new(networks: Vec<NetworkDescriptor>) -> Result<Self, CustomError> {
        if networks.is_empty() {
            return Err(CustomError::ConfigurationError(
                "at least one network must be registered".to_string(),
            ));
        }
        for (i, network) in networks.iter().enumerate() {
            if network.key.trim().is_empty() {
                return Err(CustomError::ConfigurationError(
                    "network key must not be empty".to_string(),
                ));
            }
            if networks[..i].iter().any(|n| n.key == network.key) {
                return Err(CustomError::ConfigurationError(format!(
                    "duplicate network key: {}",
                    network.key
                )));
            }
        }
        Ok(Self { networks })
    }

    /// EVM mainnets served by Alchemy.
    pub fn default_networks() -> Result<Self, CustomError> {
        Self::new(vec![
            alchemy_network("ethereum", "Ethereum", "eth-mainnet", 1, eth()),
            alchemy_network("base", "Base", "base-mainnet", 8453, eth()),
            alchemy_network("arbitrum", "Arbitrum One", "arb-mainnet", 42161, eth()),
            alchemy_network("optimism", "OP Mainnet", "opt-mainnet", 10, eth()),
            alchemy_network(
                "polygon",
                "Polygon",
                "polygon-mainnet",
                137,
                NativeAsset {
                    symbol: "POL".to_string(),
                    display_name: "Polygon Ecosystem Token".to_string(),
                    decimals: 18,
                },
            ),
        ])
    }

    /// Get network configuration based on network key
    pub fn get(&self, key: &str) -> Result<&NetworkDescriptor, CustomError> {
        self.networks
            .iter()
            .find(|n| n.key == key)
            .ok_or_else(|| CustomError::UnsupportedNetworkError(key.to_string()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.networks.iter().map(|n| n.key.as_str())
    }

    pub fn networks(&self) -> &[NetworkDescriptor] {
        &self.networks
    }
}

fn eth() -> NativeAsset {
    NativeAsset {
        symbol: "ETH".to_string(),
        display_name: "Ether".to_string(),
        decimals: 18,
    }
}

fn alchemy_network(
    key: &str,
    display_name: &str,
    subdomain: &str,
    chain_id: u64,
    native_asset: NativeAsset,
) -> NetworkDescriptor {
    NetworkDescriptor {
        key: key.to_string(),
        display_name: display_name.to_string(),
        endpoint_base: format!("https://{}.g.alchemy.com/v2/", subdomain),
        chain_id,
        native_asset,
    }
}
