use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::CustomError;

pub const METHOD_TOKEN_BALANCES: &str = "alchemy_getTokenBalances";
pub const METHOD_NATIVE_BALANCE: &str = "eth_getBalance";
pub const METHOD_TOKEN_METADATA: &str = "alchemy_getTokenMetadata";

/// JSON-RPC transport used to reach the per-network balance API.
///
/// Implementations resolve to `Ok(result)` only when the upstream answered
/// with a `result` member; every other outcome is an `Err`.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn call(&self, url: &str, method: &str, params: Value) -> Result<Value, CustomError>;
}

pub fn rpc_request(method: &str, params: Value) -> Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": 1
    })
}

#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// A parsed JSON-RPC reply.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcOutcome {
    Success(Value),
    Failure { code: i64, message: String },
}

impl RpcOutcome {
    pub fn into_result(self) -> Result<Value, CustomError> {
        match self {
            RpcOutcome::Success(value) => Ok(value),
            RpcOutcome::Failure { code, message } => Err(CustomError::RpcError { code, message }),
        }
    }
}

/// Validate a raw response body into an [`RpcOutcome`].
pub fn parse_rpc_body(body: &str) -> Result<RpcOutcome, CustomError> {
    let envelope: RpcEnvelope = serde_json::from_str(body)
        .map_err(|e| CustomError::InvalidResponseError(format!("body is not JSON-RPC: {}", e)))?;

    if let Some(error) = envelope.error {
        let message = if error.message.is_empty() {
            "upstream returned an error without a message".to_string()
        } else {
            error.message
        };
        return Ok(RpcOutcome::Failure {
            code: error.code,
            message,
        });
    }

    match envelope.result {
        Some(result) => Ok(RpcOutcome::Success(result)),
        None => Err(CustomError::InvalidResponseError(
            "response has neither result nor error".to_string(),
        )),
    }
}

/// reqwest-backed transport. Every request is bounded by the client timeout.
#[derive(Clone, Debug)]
pub struct HttpRpcTransport {
    client: reqwest::Client,
}

impl HttpRpcTransport {
    pub fn new(timeout: Duration) -> Result<Self, CustomError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                CustomError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;
        Ok(Self { client })
    }
}

// Endpoint URLs embed the API key, so transport errors are stripped of it.
fn describe_transport_error(method: &str, err: reqwest::Error) -> CustomError {
    if err.is_timeout() {
        return CustomError::NetworkError(format!("{} timed out", method));
    }
    CustomError::NetworkError(format!("{} failed: {}", method, err.without_url()))
}

#[async_trait]
impl RpcTransport for HttpRpcTransport {
    async fn call(&self, url: &str, method: &str, params: Value) -> Result<Value, CustomError> {
        log::debug!("rpc {} {}", method, params);

        let response = self
            .client
            .post(url)
            .json(&rpc_request(method, params))
            .send()
            .await
            .map_err(|e| describe_transport_error(method, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CustomError::NetworkError(format!(
                "{} returned HTTP {}",
                method, status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| describe_transport_error(method, e))?;

        parse_rpc_body(&body)?.into_result()
    }
}
