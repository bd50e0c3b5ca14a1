//! HTTP client for the analytics backend.

use super::{AnalyticsError, AnalyticsFeed, Result};
use crate::config::AnalyticsConfig;
use crate::domain::{
    IndicatorSample, MarketSummary, PathMatrix, Timeframe, TradeLogEntry, VolatilityReport,
};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Default per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for creating a new AnalyticsClient.
pub struct ClientConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

/// HTTP client for the read-only analytics endpoints.
pub struct AnalyticsClient {
    config: ClientConfig,
    http_client: HttpClient,
}

impl AnalyticsClient {
    /// Creates a new analytics client.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Creates a new analytics client from the app configuration.
    pub fn from_config(cfg: &AnalyticsConfig) -> Result<Self> {
        let mut config = ClientConfig::new(cfg.base_url.clone());
        config.request_timeout = cfg.request_timeout;
        Self::new(config)
    }

    /// Sends a GET request and decodes the JSON response body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        tf: Option<Timeframe>,
    ) -> Result<T> {
        let mut url = format!("{}{}", self.config.base_url, endpoint);
        if let Some(tf) = tf {
            url.push_str("?tf=");
            url.push_str(tf.as_str());
        }

        debug!(endpoint = %endpoint, tf = ?tf, "sending request");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(AnalyticsError::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl AnalyticsFeed for AnalyticsClient {
    async fn market_summary(&self, tf: Timeframe) -> Result<MarketSummary> {
        self.get_json("/market-data", Some(tf)).await
    }

    async fn simulation_paths(&self, tf: Timeframe) -> Result<PathMatrix> {
        self.get_json("/simulation-paths", Some(tf)).await
    }

    async fn trade_logs(&self) -> Result<Vec<TradeLogEntry>> {
        self.get_json("/trade-logs", None).await
    }

    async fn volatility_analysis(&self) -> Result<VolatilityReport> {
        self.get_json("/volatility-analysis", None).await
    }

    async fn technical_indicators(&self, tf: Timeframe) -> Result<Vec<IndicatorSample>> {
        self.get_json("/technical-indicators", Some(tf)).await
    }
}
