use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};

use crate::domain::{
    common::entities::app_errors::CoreError,
    payment::{entities::OnChainTransaction, ports::EthereumClient},
};

/// Ethereum node reached over HTTP JSON-RPC.
#[derive(Debug, Clone)]
pub struct JsonRpcEthereumClient {
    endpoint: String,
    client: Client,
    next_id: Arc<AtomicU64>,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Value,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcTransaction {
    hash: String,
    from: String,
    to: Option<String>,
    value: String,
}

impl TryFrom<RpcTransaction> for OnChainTransaction {
    type Error = CoreError;

    fn try_from(tx: RpcTransaction) -> Result<Self, Self::Error> {
        Ok(Self {
            value: parse_hex_quantity(&tx.value)?,
            hash: tx.hash,
            from: tx.from,
            to: tx.to,
        })
    }
}

/// JSON-RPC quantities are `0x`-prefixed hex without leading zeros.
pub fn parse_hex_quantity(value: &str) -> Result<u128, CoreError> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| CoreError::ExternalServiceError(format!("invalid quantity: {value}")))?;

    if digits.is_empty() {
        return Ok(0);
    }

    u128::from_str_radix(digits, 16)
        .map_err(|e| CoreError::ExternalServiceError(format!("invalid quantity {value}: {e}")))
}

impl JsonRpcEthereumClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, CoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let payload = json!({ "jsonrpc": "2.0", "method": method, "params": params, "id": id });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%method, "Ethereum RPC request failed: {}", e);
                CoreError::ExternalServiceError(format!("Ethereum RPC error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(%method, "Ethereum RPC error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Ethereum RPC returned error: {} - {}",
                status, error_text
            )));
        }

        let body: RpcResponse = response.json().await.map_err(|e| {
            CoreError::ExternalServiceError(format!("Failed to parse RPC response: {}", e))
        })?;

        decode_result(body)
    }
}

fn decode_result<T: DeserializeOwned>(body: RpcResponse) -> Result<T, CoreError> {
    if let Some(error) = body.error {
        return Err(CoreError::ExternalServiceError(format!(
            "Ethereum RPC error {}: {}",
            error.code, error.message
        )));
    }

    serde_json::from_value(body.result)
        .map_err(|e| CoreError::ExternalServiceError(format!("Unexpected RPC result: {}", e)))
}

impl EthereumClient for JsonRpcEthereumClient {
    async fn client_version(&self) -> Result<String, CoreError> {
        self.call("web3_clientVersion", json!([])).await
    }

    async fn get_transaction_by_hash(
        &self,
        hash: String,
    ) -> Result<Option<OnChainTransaction>, CoreError> {
        let transaction: Option<RpcTransaction> = self
            .call("eth_getTransactionByHash", json!([hash]))
            .await?;

        transaction.map(OnChainTransaction::try_from).transpose()
    }
}
