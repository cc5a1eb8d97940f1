use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::wallet::WalletScanResult;

/// One wallet's slot in a multi-wallet scan. Exactly one of `result` and
/// `error` is set.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletOutcome {
    pub wallet_address: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<WalletScanResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiWalletSummary {
    pub total_wallets: usize,
    pub successful_wallets: usize,
    pub total_tokens: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiWalletScanResult {
    pub scan_id: Uuid,
    pub per_wallet: Vec<WalletOutcome>,
    pub summary: MultiWalletSummary,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    #[serde(default)]
    pub wallets: Vec<super::wallet::WalletEntry>,
    #[serde(default)]
    pub include_metadata: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedScanRequest {
    pub primary_address: Option<String>,
    #[serde(default)]
    pub linked_addresses: Vec<String>,
    #[serde(default)]
    pub include_metadata: bool,
}
