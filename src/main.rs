use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

mod api;
mod config;
mod errors;
mod models;
mod services;

use services::{
    balance_fetcher::NetworkBalanceFetcher, multi_wallet_scanner::MultiWalletScanner,
    network_config::NetworkRegistry, rpc_client::HttpRpcTransport,
    wallet_scanner::WalletBalanceAggregator,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::Config::from_env().map_err(|e| {
        log::error!("{}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let transport = HttpRpcTransport::new(config.request_timeout)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let registry = Arc::new(
        NetworkRegistry::default_networks().map_err(|e| std::io::Error::other(e.to_string()))?,
    );
    log::info!(
        "scanning {} networks: {}",
        registry.networks().len(),
        registry.keys().collect::<Vec<_>>().join(", ")
    );

    let fetcher = NetworkBalanceFetcher::new(
        registry,
        Arc::new(transport),
        config.alchemy_api_key.clone(),
    );
    let scanner = web::Data::new(MultiWalletScanner::new(WalletBalanceAggregator::new(
        fetcher,
    )));

    let origins = config.cors_allowed_origins.clone();
    log::info!("listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        let cors = origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
            ])
            .supports_credentials();
        App::new()
            .app_data(scanner.clone())
            .configure(api::config)
            .wrap(cors)
            .wrap(Logger::default())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
