use serde::{Deserialize, Serialize};

/// Descriptor of a network's base currency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeAsset {
    pub symbol: String,
    pub display_name: String,
    pub decimals: u8,
}

/// One entry of the network registry.
///
/// `endpoint_base` is incomplete on its own: the upstream API key must be
/// appended to obtain a usable URL (see [`NetworkDescriptor::endpoint_url`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDescriptor {
    pub key: String,
    pub display_name: String,
    pub endpoint_base: String,
    pub chain_id: u64,
    pub native_asset: NativeAsset,
}

impl NetworkDescriptor {
    pub fn endpoint_url(&self, api_key: &str) -> String {
        format!("{}{}", self.endpoint_base, api_key)
    }
}
