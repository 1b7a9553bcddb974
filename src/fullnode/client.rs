//! Fullnode JSON-RPC client with timeout and failover.
//!
//! # Responsibilities
//! - Submit signed transactions
//! - Query transactions by digest
//! - Poll until a submitted transaction is final
//! - Fail over across configured endpoints on transport errors

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout, Instant};

use crate::config::FullnodeConfig;
use crate::fullnode::types::{
    FullnodeError, FullnodeResult, JsonRpcRequest, JsonRpcResponse,
};
use crate::net;
use crate::network::Network;
use crate::observability::metrics;
use crate::resilience::PollSchedule;
use crate::transaction::ExecutionResult;

/// JSON-RPC client for one network's fullnodes.
#[derive(Clone)]
pub struct FullnodeClient {
    http: reqwest::Client,
    /// Primary endpoint first, then failovers.
    endpoints: Vec<url::Url>,
    config: FullnodeConfig,
    timeout_duration: Duration,
    next_id: Arc<AtomicU64>,
}

impl FullnodeClient {
    /// Create a client for `network` using the configured (or default) endpoint.
    pub fn new(config: &FullnodeConfig, network: Network) -> FullnodeResult<Self> {
        let primary = config.endpoint_for(network);
        let primary_url: url::Url = primary.parse().map_err(|e: url::ParseError| {
            FullnodeError::InvalidUrl {
                url: primary.clone(),
                reason: e.to_string(),
            }
        })?;

        let mut endpoints = vec![primary_url];
        for url_str in &config.failover_urls {
            match url_str.parse() {
                Ok(url) => endpoints.push(url),
                Err(_) => tracing::warn!(url = %url_str, "Ignoring invalid failover RPC URL"),
            }
        }

        let http = net::http_client(&endpoints, None)
            .map_err(|e| FullnodeError::Http(e.to_string()))?;

        tracing::info!(
            rpc_url = %primary,
            failovers = endpoints.len() - 1,
            %network,
            "Fullnode client initialized"
        );

        Ok(Self {
            http,
            endpoints,
            config: config.clone(),
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
            next_id: Arc::new(AtomicU64::new(1)),
        })
    }

    /// Chain identifier reported by the node.
    pub async fn get_chain_identifier(&self) -> FullnodeResult<String> {
        self.call("sui_getChainIdentifier", json!([])).await
    }

    /// Submit signed transaction bytes.
    pub async fn execute_transaction_block(
        &self,
        tx_bytes: &str,
        signatures: &[String],
    ) -> FullnodeResult<ExecutionResult> {
        self.call(
            "sui_executeTransactionBlock",
            json!([tx_bytes, signatures, { "showEffects": true, "showEvents": true }]),
        )
        .await
    }

    /// Fetch a transaction by digest; `None` while the node does not know it.
    pub async fn get_transaction_block(&self, digest: &str) -> FullnodeResult<Option<ExecutionResult>> {
        match self
            .call::<ExecutionResult>(
                "sui_getTransactionBlock",
                json!([digest, { "showEffects": true, "showEvents": true }]),
            )
            .await
        {
            Ok(result) => Ok(Some(result)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Poll until `digest` is visible on the node or the finality timeout elapses.
    pub async fn wait_for_transaction(&self, digest: &str) -> FullnodeResult<ExecutionResult> {
        let deadline = Instant::now() + Duration::from_secs(self.config.finality_timeout_secs);
        let mut schedule = PollSchedule::new(self.config.poll_base_ms, self.config.poll_max_ms);

        loop {
            let delay = schedule.next_delay();
            if Instant::now() + delay > deadline {
                break;
            }
            sleep(delay).await;

            metrics::record_finality_poll();
            match self.get_transaction_block(digest).await? {
                Some(result) => {
                    tracing::debug!(digest, polls = schedule.attempts(), "Transaction final");
                    return Ok(result);
                }
                None => tracing::debug!(digest, "Transaction pending"),
            }
        }

        Err(FullnodeError::FinalityTimeout {
            digest: digest.to_string(),
            secs: self.config.finality_timeout_secs,
        })
    }

    /// Check if the node is reachable.
    pub async fn is_healthy(&self) -> bool {
        self.get_chain_identifier().await.is_ok()
    }

    pub fn config(&self) -> &FullnodeConfig {
        &self.config
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> FullnodeResult<T> {
        for (i, endpoint) in self.endpoints.iter().enumerate() {
            let fut = self.request::<T>(endpoint, method, &params);
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(result)) => return Ok(result),
                // The node understood the request; another node would answer the same.
                Ok(Err(e @ FullnodeError::Rpc { .. })) => return Err(e),
                Ok(Err(e)) => {
                    tracing::warn!(provider_idx = i, method, error = %e, "RPC error, trying next provider");
                }
                Err(_) => {
                    tracing::warn!(provider_idx = i, method, "RPC timeout, trying next provider");
                }
            }
        }
        Err(FullnodeError::AllProvidersFailed(method.to_string()))
    }

    async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &url::Url,
        method: &str,
        params: &Value,
    ) -> FullnodeResult<T> {
        let body = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };

        let resp = self
            .http
            .post(endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| FullnodeError::Http(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FullnodeError::Http(format!("status {}", status)));
        }

        let envelope: JsonRpcResponse<T> = resp
            .json()
            .await
            .map_err(|e| FullnodeError::Decode(e.to_string()))?;

        if let Some(err) = envelope.error {
            return Err(FullnodeError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        envelope
            .result
            .ok_or_else(|| FullnodeError::Decode("response has neither result nor error".to_string()))
    }
}

impl std::fmt::Debug for FullnodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FullnodeClient")
            .field("endpoints", &self.endpoints.len())
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}
