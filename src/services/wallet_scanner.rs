use std::collections::BTreeMap;

use chrono::Utc;

use crate::{
    errors::CustomError,
    models::{
        network_result::NetworkResult,
        wallet::{WalletScanResult, WalletScanSummary},
    },
    services::{address::validate_address, balance_fetcher::NetworkBalanceFetcher},
};

/// Scans one wallet across every registered network.
#[derive(Clone)]
pub struct WalletBalanceAggregator {
    fetcher: NetworkBalanceFetcher,
}

impl WalletBalanceAggregator {
    pub fn new(fetcher: NetworkBalanceFetcher) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &NetworkBalanceFetcher {
        &self.fetcher
    }

    /// Fails only on a malformed address, before any request is made. Every
    /// network is queried concurrently and waited for; one network failing
    /// never cancels the others.
    pub async fn scan_wallet(
        &self,
        wallet_address: &str,
        include_metadata: bool,
    ) -> Result<WalletScanResult, CustomError> {
        validate_address(wallet_address)?;

        let timestamp = Utc::now();
        let lookups = self.fetcher.registry().keys().map(|key| {
            self.fetcher
                .fetch_network_balances(wallet_address, key, include_metadata)
        });
        let results = futures_util::future::join_all(lookups).await;

        let summary = summarize(&results);
        let per_network: BTreeMap<String, NetworkResult> = results
            .into_iter()
            .map(|result| (result.network_key.clone(), result))
            .collect();

        log::info!(
            "scanned {}: {}/{} networks ok, {} tokens",
            wallet_address,
            summary.successful_networks,
            summary.total_networks,
            summary.total_tokens_found
        );

        Ok(WalletScanResult {
            wallet_address: wallet_address.to_string(),
            timestamp,
            summary,
            per_network,
        })
    }
}

fn summarize(results: &[NetworkResult]) -> WalletScanSummary {
    WalletScanSummary {
        total_networks: results.len(),
        successful_networks: results.iter().filter(|r| r.succeeded).count(),
        total_tokens_found: results.iter().map(|r| r.tokens.len()).sum(),
    }
}
