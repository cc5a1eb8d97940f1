use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    errors::CustomError,
    models::{
        network_config::{NativeAsset, NetworkDescriptor},
        network_result::NetworkResult,
        token::{TokenAmount, TokenMetadata, NATIVE_CONTRACT},
    },
    services::{
        address::validate_address,
        amount_formatter::{format_units, parse_hex_quantity},
        network_config::NetworkRegistry,
        rpc_client::{
            RpcTransport, METHOD_NATIVE_BALANCE, METHOD_TOKEN_BALANCES, METHOD_TOKEN_METADATA,
        },
    },
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenBalancesResult {
    token_balances: Vec<RawTokenBalance>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTokenBalance {
    contract_address: String,
    #[serde(default)]
    token_balance: Option<String>,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawTokenMetadata {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    decimals: Option<u8>,
    #[serde(default)]
    logo: Option<String>,
}

impl From<RawTokenMetadata> for TokenMetadata {
    fn from(raw: RawTokenMetadata) -> Self {
        Self {
            display_name: raw.name,
            symbol: raw.symbol,
            decimals: raw.decimals,
            logo_url: raw.logo,
        }
    }
}

struct FungibleBalance {
    contract_address: String,
    amount: BigUint,
}

/// Queries one network for one wallet's balances.
#[derive(Clone)]
pub struct NetworkBalanceFetcher {
    registry: Arc<NetworkRegistry>,
    transport: Arc<dyn RpcTransport>,
    api_key: String,
}

impl NetworkBalanceFetcher {
    pub fn new(
        registry: Arc<NetworkRegistry>,
        transport: Arc<dyn RpcTransport>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            transport,
            api_key: api_key.into(),
        }
    }

    pub fn registry(&self) -> &NetworkRegistry {
        &self.registry
    }

    /// Native balance first (when non-zero), then non-zero fungible tokens in
    /// upstream order. Never fails: problems are reported in the result.
    pub async fn fetch_network_balances(
        &self,
        wallet_address: &str,
        network_key: &str,
        include_metadata: bool,
    ) -> NetworkResult {
        let network = match self.registry.get(network_key) {
            Ok(network) => network,
            Err(e) => return NetworkResult::unknown_network(network_key, e.to_string()),
        };
        if let Err(e) = validate_address(wallet_address) {
            return NetworkResult::failure(network, e.to_string());
        }

        match self
            .fetch_tokens(network, wallet_address, include_metadata)
            .await
        {
            Ok(tokens) => {
                log::debug!(
                    "{}: {} non-zero balances for {}",
                    network.key,
                    tokens.len(),
                    wallet_address
                );
                NetworkResult::success(network, tokens)
            }
            Err(e) => {
                log::warn!(
                    "{}: balance lookup failed for {}: {}",
                    network.key,
                    wallet_address,
                    e
                );
                NetworkResult::failure(network, e.to_string())
            }
        }
    }

    async fn fetch_tokens(
        &self,
        network: &NetworkDescriptor,
        wallet_address: &str,
        include_metadata: bool,
    ) -> Result<Vec<TokenAmount>, CustomError> {
        let url = network.endpoint_url(&self.api_key);

        let (token_reply, native_reply) = tokio::join!(
            self.transport.call(
                &url,
                METHOD_TOKEN_BALANCES,
                serde_json::json!([wallet_address, "erc20"]),
            ),
            self.transport.call(
                &url,
                METHOD_NATIVE_BALANCE,
                serde_json::json!([wallet_address, "latest"]),
            ),
        );

        let fungible = parse_token_balances(token_reply?)?;
        let native = parse_native_balance(native_reply?)?;

        let mut tokens = Vec::with_capacity(fungible.len() + 1);
        if !native.is_zero() {
            tokens.push(native_token(&network.native_asset, &native));
        }

        if include_metadata {
            tokens.extend(self.enrich(&url, network, fungible).await);
        } else {
            tokens.extend(fungible.into_iter().map(|balance| TokenAmount {
                contract_address: balance.contract_address,
                raw_balance: balance.amount.to_str_radix(10),
                is_native: false,
                metadata: None,
                formatted_balance: None,
            }));
        }

        Ok(tokens)
    }

    async fn enrich(
        &self,
        url: &str,
        network: &NetworkDescriptor,
        balances: Vec<FungibleBalance>,
    ) -> Vec<TokenAmount> {
        let lookups = balances.iter().map(|balance| {
            self.transport.call(
                url,
                METHOD_TOKEN_METADATA,
                serde_json::json!([balance.contract_address]),
            )
        });
        let replies = futures_util::future::join_all(lookups).await;

        balances
            .into_iter()
            .zip(replies)
            .map(|(balance, reply)| {
                let metadata = match reply
                    .and_then(|value| {
                        serde_json::from_value::<RawTokenMetadata>(value)
                            .map_err(|e| CustomError::InvalidResponseError(e.to_string()))
                    }) {
                    Ok(raw) => Some(TokenMetadata::from(raw)),
                    Err(e) => {
                        log::debug!(
                            "{}: no metadata for {}: {}",
                            network.key,
                            balance.contract_address,
                            e
                        );
                        None
                    }
                };
                let formatted_balance = metadata
                    .as_ref()
                    .and_then(|m| m.decimals)
                    .map(|decimals| format_units(&balance.amount, decimals));

                TokenAmount {
                    contract_address: balance.contract_address,
                    raw_balance: balance.amount.to_str_radix(10),
                    is_native: false,
                    metadata,
                    formatted_balance,
                }
            })
            .collect()
    }
}

fn parse_token_balances(result: Value) -> Result<Vec<FungibleBalance>, CustomError> {
    let parsed: TokenBalancesResult = serde_json::from_value(result).map_err(|e| {
        CustomError::InvalidResponseError(format!("unexpected token balance payload: {}", e))
    })?;

    let balances = parsed
        .token_balances
        .into_iter()
        .filter_map(|entry| {
            if entry.error.as_ref().is_some_and(|e| !e.is_null()) {
                return None;
            }
            let amount = parse_hex_quantity(entry.token_balance.as_deref()?).ok()?;
            if amount.is_zero() {
                return None;
            }
            Some(FungibleBalance {
                contract_address: entry.contract_address.to_lowercase(),
                amount,
            })
        })
        .collect();

    Ok(balances)
}

fn parse_native_balance(result: Value) -> Result<BigUint, CustomError> {
    let hex = result.as_str().ok_or_else(|| {
        CustomError::InvalidResponseError("native balance is not a hex string".to_string())
    })?;
    parse_hex_quantity(hex)
        .map_err(|e| CustomError::InvalidResponseError(format!("native balance: {}", e)))
}

fn native_token(asset: &NativeAsset, amount: &BigUint) -> TokenAmount {
    TokenAmount {
        contract_address: NATIVE_CONTRACT.to_string(),
        raw_balance: amount.to_str_radix(10),
        is_native: true,
        metadata: Some(TokenMetadata {
            display_name: Some(asset.display_name.clone()),
            symbol: Some(asset.symbol.clone()),
            decimals: Some(asset.decimals),
            logo_url: None,
        }),
        formatted_balance: Some(format_units(amount, asset.decimals)),
    }
}
