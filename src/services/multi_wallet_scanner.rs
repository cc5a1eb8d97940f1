use uuid::Uuid;

use crate::{
    models::{
        scan::{MultiWalletScanResult, MultiWalletSummary, WalletOutcome},
        wallet::WalletEntry,
    },
    services::wallet_scanner::WalletBalanceAggregator,
};

/// Scans a set of wallets concurrently. Each wallet runs in its own task so a
/// failing or panicking scan only affects its own entry.
#[derive(Clone)]
pub struct MultiWalletScanner {
    aggregator: WalletBalanceAggregator,
}

impl MultiWalletScanner {
    pub fn new(aggregator: WalletBalanceAggregator) -> Self {
        Self { aggregator }
    }

    pub fn aggregator(&self) -> &WalletBalanceAggregator {
        &self.aggregator
    }

    pub async fn scan_wallets(
        &self,
        wallets: &[WalletEntry],
        include_metadata: bool,
    ) -> MultiWalletScanResult {
        let scan_id = Uuid::new_v4();
        if wallets.is_empty() {
            return MultiWalletScanResult {
                scan_id,
                per_wallet: Vec::new(),
                summary: MultiWalletSummary::default(),
            };
        }

        let tasks = wallets.iter().map(|wallet| {
            let aggregator = self.aggregator.clone();
            let address = wallet.address.clone();
            tokio::spawn(async move { aggregator.scan_wallet(&address, include_metadata).await })
        });
        let joined = futures_util::future::join_all(tasks).await;

        let per_wallet: Vec<WalletOutcome> = wallets
            .iter()
            .zip(joined)
            .map(|(wallet, joined)| {
                let (result, error) = match joined {
                    Ok(Ok(result)) => (Some(result), None),
                    Ok(Err(e)) => (None, Some(e.to_string())),
                    Err(e) => (None, Some(format!("wallet scan aborted: {}", e))),
                };
                if let Some(error) = &error {
                    log::warn!("scan of {} ({}) failed: {}", wallet.address, wallet.label, error);
                }
                WalletOutcome {
                    wallet_address: wallet.address.clone(),
                    label: wallet.label.clone(),
                    result,
                    error,
                }
            })
            .collect();

        let summary = summarize(&per_wallet);
        log::info!(
            "scan {} finished: {}/{} wallets ok, {} tokens",
            scan_id,
            summary.successful_wallets,
            summary.total_wallets,
            summary.total_tokens
        );

        MultiWalletScanResult {
            scan_id,
            per_wallet,
            summary,
        }
    }
}

fn summarize(per_wallet: &[WalletOutcome]) -> MultiWalletSummary {
    MultiWalletSummary {
        total_wallets: per_wallet.len(),
        successful_wallets: per_wallet.iter().filter(|w| w.result.is_some()).count(),
        total_tokens: per_wallet
            .iter()
            .filter_map(|w| w.result.as_ref())
            .map(|r| r.summary.total_tokens_found)
            .sum(),
    }
}
