use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::api_response::failure_response;

#[derive(Error, Debug)]
pub enum CustomError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Invalid address: {0}")]
    InvalidAddressError(String),

    #[error("Invalid amount: {0}")]
    InvalidAmountError(String),

    #[error("Unsupported network: {0}")]
    UnsupportedNetworkError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("RPC error {code}: {message}")]
    RpcError { code: i64, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponseError(String),

    #[error("Invalid input: {0}")]
    ValidationError(String),
}

impl CustomError {
    fn status_code_u16(&self) -> u16 {
        match self {
            CustomError::ConfigurationError(_) => 500,
            CustomError::InvalidAddressError(_) => 400,
            CustomError::InvalidAmountError(_) => 400,
            CustomError::UnsupportedNetworkError(_) => 400,
            CustomError::NetworkError(_) => 502,
            CustomError::RpcError { .. } => 502,
            CustomError::InvalidResponseError(_) => 502,
            CustomError::ValidationError(_) => 400,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    code: u16,
    message: String,
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code_u16()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let api_error = ApiError {
            code: self.status_code_u16(),
            message: self.to_string(),
        };
        failure_response(self.status_code(), api_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_address_maps_to_bad_request() {
        let err = CustomError::InvalidAddressError("bad".to_string());
        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid address: bad");
    }

    #[test]
    fn upstream_failures_map_to_bad_gateway() {
        let err = CustomError::RpcError {
            code: -32602,
            message: "invalid params".to_string(),
        };
        assert_eq!(err.error_response().status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "RPC error -32602: invalid params");
    }

    #[test]
    fn configuration_error_is_internal() {
        let err = CustomError::ConfigurationError("ALCHEMY_API_KEY is not set".to_string());
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
