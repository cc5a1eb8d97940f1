use serde::{Deserialize, Serialize};

use super::{network_config::NetworkDescriptor, token::TokenAmount};

/// Outcome of scanning one wallet on one network.
///
/// A failed network keeps its slot in the scan with an error message and no
/// tokens; failures never surface as `Err`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResult {
    pub network_key: String,
    pub display_name: String,
    pub chain_id: u64,
    pub succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub tokens: Vec<TokenAmount>,
}

impl NetworkResult {
    pub fn success(network: &NetworkDescriptor, tokens: Vec<TokenAmount>) -> Self {
        Self {
            network_key: network.key.clone(),
            display_name: network.display_name.clone(),
            chain_id: network.chain_id,
            succeeded: true,
            error_message: None,
            tokens,
        }
    }

    pub fn failure(network: &NetworkDescriptor, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = "unknown error".to_string();
        }
        Self {
            network_key: network.key.clone(),
            display_name: network.display_name.clone(),
            chain_id: network.chain_id,
            succeeded: false,
            error_message: Some(message),
            tokens: Vec::new(),
        }
    }

    /// Failure for a key that has no registry entry.
    pub fn unknown_network(network_key: &str, message: impl Into<String>) -> Self {
        Self {
            network_key: network_key.to_string(),
            display_name: network_key.to_string(),
            chain_id: 0,
            succeeded: false,
            error_message: Some(message.into()),
            tokens: Vec::new(),
        }
    }
}
