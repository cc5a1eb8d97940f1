use std::env;
use std::time::Duration;

use crate::errors::CustomError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:8080,http://localhost:5173";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub alchemy_api_key: String,
    pub request_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, CustomError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source so it can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CustomError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let alchemy_api_key = lookup("ALCHEMY_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                CustomError::ConfigurationError("ALCHEMY_API_KEY is not set".to_string())
            })?;

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                CustomError::ConfigurationError(format!("Failed to parse PORT: {}", e))
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                CustomError::ConfigurationError(format!(
                    "Failed to parse REQUEST_TIMEOUT_SECS: {}",
                    e
                ))
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(CustomError::ConfigurationError(
                "REQUEST_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            alchemy_api_key,
            request_timeout: Duration::from_secs(timeout_secs),
            cors_allowed_origins,
        })
    }
}
