use serde::{Deserialize, Serialize};

/// Contract address used for a chain's native asset.
pub const NATIVE_CONTRACT: &str = "native";

/// Absent fields are left out of the JSON rather than rendered as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// A non-zero holding of one asset on one network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAmount {
    pub contract_address: String,
    /// Minor units as a base-10 string.
    pub raw_balance: String,
    pub is_native: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TokenMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_balance: Option<String>,
}
