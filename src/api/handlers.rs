use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::{
    errors::CustomError,
    models::{
        api_response::success_response,
        scan::{ConnectedScanRequest, ScanRequest},
        wallet::WalletEntry,
    },
    services::{multi_wallet_scanner::MultiWalletScanner, wallet_source::collect_wallets},
};

/// Upper bound on wallets accepted by a single scan request.
pub const MAX_WALLETS_PER_SCAN: usize = 10;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceQuery {
    #[serde(default)]
    include_metadata: bool,
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

fn check_wallet_count(wallets: &[WalletEntry]) -> Result<(), CustomError> {
    if wallets.len() > MAX_WALLETS_PER_SCAN {
        return Err(CustomError::ValidationError(format!(
            "at most {} wallets can be scanned at once, got {}",
            MAX_WALLETS_PER_SCAN,
            wallets.len()
        )));
    }
    Ok(())
}

#[get("/health")]
async fn health() -> HttpResponse {
    success_response(HealthStatus { status: "ok" })
}

#[get("/networks")]
async fn list_networks(scanner: web::Data<MultiWalletScanner>) -> HttpResponse {
    let registry = scanner.aggregator().fetcher().registry();
    success_response(registry.networks())
}

#[get("/wallets/{address}/balances")]
async fn wallet_balances(
    scanner: web::Data<MultiWalletScanner>,
    address: web::Path<String>,
    query: web::Query<BalanceQuery>,
) -> Result<HttpResponse, CustomError> {
    let result = scanner
        .aggregator()
        .scan_wallet(&address, query.include_metadata)
        .await?;
    Ok(success_response(result))
}

#[post("/scan")]
async fn scan_wallets(
    scanner: web::Data<MultiWalletScanner>,
    scan_req: web::Json<ScanRequest>,
) -> Result<HttpResponse, CustomError> {
    let scan_req = scan_req.into_inner();
    check_wallet_count(&scan_req.wallets)?;
    log::debug!("scan requested for {} wallets", scan_req.wallets.len());

    let result = scanner
        .scan_wallets(&scan_req.wallets, scan_req.include_metadata)
        .await;
    Ok(success_response(result))
}

#[post("/scan/connected")]
async fn scan_connected_wallets(
    scanner: web::Data<MultiWalletScanner>,
    scan_req: web::Json<ConnectedScanRequest>,
) -> Result<HttpResponse, CustomError> {
    let scan_req = scan_req.into_inner();
    let wallets = collect_wallets(
        scan_req.primary_address.as_deref(),
        &scan_req.linked_addresses,
    );
    check_wallet_count(&wallets)?;

    let result = scanner
        .scan_wallets(&wallets, scan_req.include_metadata)
        .await;
    Ok(success_response(result))
}
