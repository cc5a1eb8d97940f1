pub mod api_response;
pub mod network_config;
pub mod network_result;
pub mod scan;
pub mod token;
pub mod wallet;
