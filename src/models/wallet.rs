use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::network_result::NetworkResult;

/// A wallet to scan, as supplied by the wallet source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletEntry {
    pub address: String,
    pub label: String,
}

impl WalletEntry {
    pub fn new(address: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletScanSummary {
    pub total_networks: usize,
    pub successful_networks: usize,
    pub total_tokens_found: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletScanResult {
    pub wallet_address: String,
    pub timestamp: DateTime<Utc>,
    pub summary: WalletScanSummary,
    pub per_network: BTreeMap<String, NetworkResult>,
}
