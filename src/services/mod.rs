pub mod address;
pub mod amount_formatter;
pub mod balance_fetcher;
pub mod multi_wallet_scanner;
pub mod network_config;
pub mod rpc_client;
pub mod wallet_scanner;
pub mod wallet_source;

#[cfg(test)]
pub mod test_support;
