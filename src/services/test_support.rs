//! In-memory transport and fixtures shared by the service tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    errors::CustomError,
    models::network_config::{NativeAsset, NetworkDescriptor},
    services::{
        balance_fetcher::NetworkBalanceFetcher,
        network_config::NetworkRegistry,
        rpc_client::{RpcTransport, METHOD_NATIVE_BALANCE, METHOD_TOKEN_BALANCES, METHOD_TOKEN_METADATA},
    },
};

pub const API_KEY: &str = "test-key";
pub const WALLET_A: &str = "0x1111111111111111111111111111111111111111";
pub const WALLET_B: &str = "0x2222222222222222222222222222222222222222";
pub const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
pub const DAI: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";

#[derive(Clone, Debug)]
pub enum FakeReply {
    Result(Value),
    Rpc(i64, String),
    Network(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCall {
    pub url: String,
    pub method: String,
    pub params: Value,
}

/// Answers calls from a table keyed by (url, method, first param).
#[derive(Default)]
pub struct FakeTransport {
    replies: Mutex<HashMap<(String, String, String), FakeReply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeTransport {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, network_key: &str, method: &str, first_param: &str, reply: FakeReply) {
        self.replies.lock().unwrap().insert(
            (
                network_url(network_key),
                method.to_string(),
                first_param.to_lowercase(),
            ),
            reply,
        );
    }

    pub fn native_balance(&self, network_key: &str, wallet: &str, hex: &str) {
        self.reply(
            network_key,
            METHOD_NATIVE_BALANCE,
            wallet,
            FakeReply::Result(Value::String(hex.to_string())),
        );
    }

    pub fn token_balances(&self, network_key: &str, wallet: &str, balances: &[(&str, &str)]) {
        let entries: Vec<Value> = balances
            .iter()
            .map(|(contract, balance)| {
                serde_json::json!({
                    "contractAddress": contract,
                    "tokenBalance": balance,
                    "error": null
                })
            })
            .collect();
        self.reply(
            network_key,
            METHOD_TOKEN_BALANCES,
            wallet,
            FakeReply::Result(serde_json::json!({
                "address": wallet,
                "tokenBalances": entries
            })),
        );
    }

    pub fn token_metadata(&self, network_key: &str, contract: &str, symbol: &str, decimals: u8) {
        self.reply(
            network_key,
            METHOD_TOKEN_METADATA,
            contract,
            FakeReply::Result(serde_json::json!({
                "name": format!("{} Token", symbol),
                "symbol": symbol,
                "decimals": decimals,
                "logo": null
            })),
        );
    }

    /// A wallet with nothing on the given network.
    pub fn empty_wallet(&self, network_key: &str, wallet: &str) {
        self.native_balance(network_key, wallet, "0x0");
        self.token_balances(network_key, wallet, &[]);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RpcTransport for FakeTransport {
    async fn call(&self, url: &str, method: &str, params: Value) -> Result<Value, CustomError> {
        let first = params
            .get(0)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_lowercase();
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            method: method.to_string(),
            params,
        });

        let reply = self
            .replies
            .lock()
            .unwrap()
            .get(&(url.to_string(), method.to_string(), first))
            .cloned();

        match reply {
            Some(FakeReply::Result(value)) => Ok(value),
            Some(FakeReply::Rpc(code, message)) => Err(CustomError::RpcError { code, message }),
            Some(FakeReply::Network(message)) => Err(CustomError::NetworkError(message)),
            None => Err(CustomError::NetworkError(format!(
                "connection refused for {}",
                method
            ))),
        }
    }
}

pub fn test_network(key: &str, chain_id: u64) -> NetworkDescriptor {
    NetworkDescriptor {
        key: key.to_string(),
        display_name: key.to_uppercase(),
        endpoint_base: format!("http://{}.test/", key),
        chain_id,
        native_asset: NativeAsset {
            symbol: "ETH".to_string(),
            display_name: "Ether".to_string(),
            decimals: 18,
        },
    }
}

pub fn network_url(key: &str) -> String {
    format!("http://{}.test/{}", key, API_KEY)
}

pub fn test_registry() -> Arc<NetworkRegistry> {
    Arc::new(
        NetworkRegistry::new(vec![test_network("alpha", 1), test_network("beta", 2)])
            .expect("valid test registry"),
    )
}

pub fn test_fetcher(transport: Arc<FakeTransport>) -> NetworkBalanceFetcher {
    NetworkBalanceFetcher::new(test_registry(), transport, API_KEY)
}
