//! Bitcoin Core JSON-RPC client
//!
//! Thin reqwest-based transport for the three node calls the pipeline
//! needs: `getrawmempool`, `getrawtransaction` and
//! `decoderawtransaction`. Implements [`MempoolSource`] so the pipeline
//! never sees reqwest or the JSON-RPC envelope.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::Config;
use crate::estimator::{DecodedTransaction, FetchError, MempoolSource};

/// Per-request timeout; a timed-out fetch becomes an ordinary
/// per-transaction skip upstream.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct CoreRpcClient {
    url: String,
    user: String,
    password: String,
    http: Client,
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: &'static str,
    method: &'a str,
    params: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

impl CoreRpcClient {
    pub fn new(url: String, user: String, password: String) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| {
                FetchError::transport(format!("failed to build HTTP client: {}", err))
            })?;

        Ok(Self {
            url,
            user,
            password,
            http,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(
            config.rpc_url(),
            config.rpc_user.clone(),
            config.rpc_password.clone(),
        )
    }

    /// Issue one JSON-RPC call and unwrap its envelope.
    ///
    /// Bitcoin Core reports node-level errors inside the envelope with a
    /// non-2xx status, so the body is parsed before the status decides
    /// anything.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, FetchError> {
        let request = RpcRequest {
            jsonrpc: "1.0",
            id: "mempool-fee-levels",
            method,
            params,
        };

        let response = self
            .http
            .post(&self.url)
            .basic_auth(&self.user, Some(&self.password))
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                FetchError::transport(format!("{} request failed: {}", method, err))
            })?;

        let status = response.status();
        let envelope: RpcResponse<T> = match response.json().await {
            Ok(envelope) => envelope,
            Err(err) => {
                return Err(FetchError::transport(format!(
                    "node returned HTTP {} for {}: {}",
                    status, method, err
                )))
            }
        };

        if let Some(error) = envelope.error {
            return Err(FetchError::transport(format!(
                "node error {} for {}: {}",
                error.code, method, error.message
            )));
        }

        envelope
            .result
            .ok_or_else(|| FetchError::decode(format!("empty {} reply", method)))
    }

    /// Transaction ids currently in the mempool (`getrawmempool false`).
    pub async fn get_raw_mempool(&self) -> Result<Vec<String>, FetchError> {
        self.call("getrawmempool", vec![json!(false)]).await
    }

    /// Raw serialized transaction hex by id.
    pub async fn get_raw_transaction(&self, txid: &str) -> Result<String, FetchError> {
        self.call("getrawtransaction", vec![json!(txid)]).await
    }

    /// Decode raw transaction hex into typed structure.
    pub async fn decode_raw_transaction(
        &self,
        raw: &str,
    ) -> Result<DecodedTransaction, FetchError> {
        self.call("decoderawtransaction", vec![json!(raw)]).await
    }
}

#[async_trait]
impl MempoolSource for CoreRpcClient {
    async fn mempool_txids(&self) -> Result<Vec<String>, FetchError> {
        self.get_raw_mempool().await
    }

    async fn decoded_transaction(
        &self,
        txid: &str,
    ) -> Result<DecodedTransaction, FetchError> {
        let raw = self.get_raw_transaction(txid).await?;
        self.decode_raw_transaction(&raw).await
    }

    fn source_name(&self) -> &str {
        "bitcoind"
    }
}
