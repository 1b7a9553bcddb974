//! HTTP client for the sponsor service.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::config::SponsorConfig;
use crate::net;
use crate::observability::metrics;
use crate::sponsor::types::{
    ExecuteRequest, SponsorError, SponsorRequest, SponsorResponse, SponsorResult,
};
use crate::transaction::ExecutionResult;

/// Third party that cosigns and pays for transactions.
#[async_trait]
pub trait SponsorService: Send + Sync {
    /// Attach gas and sponsor signature to transaction-kind bytes.
    async fn sponsor(&self, request: &SponsorRequest) -> SponsorResult<SponsorResponse>;

    /// Submit the sponsored transaction with the sender's signature.
    async fn execute(&self, request: &ExecuteRequest) -> SponsorResult<ExecutionResult>;
}

/// [`SponsorService`] reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSponsorClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSponsorClient {
    pub fn new(config: &SponsorConfig) -> SponsorResult<Self> {
        let base = url::Url::parse(&config.url).map_err(|e| SponsorError::InvalidUrl {
            url: config.url.clone(),
            reason: e.to_string(),
        })?;

        let http = net::http_client(&[base], Some(Duration::from_secs(config.timeout_secs)))
            .map_err(|e| SponsorError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, R>(&self, endpoint: &'static str, body: &B) -> SponsorResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let result = self.post_inner(endpoint, body).await;
        metrics::record_sponsor_request(endpoint, result.is_ok());
        if let Err(e) = &result {
            tracing::warn!(endpoint, error = %e, "Sponsor request failed");
        }
        result
    }

    async fn post_inner<B, R>(&self, endpoint: &'static str, body: &B) -> SponsorResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let resp = self
            .http
            .post(format!("{}/{}", self.base_url, endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| SponsorError::Transport(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| SponsorError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(SponsorError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| SponsorError::Decode(e.to_string()))
    }
}

#[async_trait]
impl SponsorService for HttpSponsorClient {
    async fn sponsor(&self, request: &SponsorRequest) -> SponsorResult<SponsorResponse> {
        tracing::debug!(network = %request.network, sender = %request.sender, "Requesting sponsorship");
        self.post("sponsored", request).await
    }

    async fn execute(&self, request: &ExecuteRequest) -> SponsorResult<ExecutionResult> {
        tracing::debug!(digest = %request.digest, "Finalizing sponsored transaction");
        self.post("execute", request).await
    }
}
