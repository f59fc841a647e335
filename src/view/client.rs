//! HTTP client for a running relay's `/api/*` endpoints.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use urlencoding::encode;

use crate::{
    api::types::{CandleSeries, CompanyInfo},
    data::MarketData,
    error::FetchError,
};

#[derive(Clone)]
pub struct RelayClient {
    client: Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("ticker-relay/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Any non-2xx answer counts as a failed call.
    async fn get<T: DeserializeOwned>(&self, route: &str, symbol: &str) -> Result<T, FetchError> {
        let url = format!("{}/api/{route}/{}", self.base_url, encode(symbol));
        debug!(%url, "relay request");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl MarketData for RelayClient {
    async fn quote(&self, symbol: &str) -> Result<Value, FetchError> {
        self.get("stock", symbol).await
    }

    async fn company(&self, symbol: &str) -> Result<CompanyInfo, FetchError> {
        self.get("company", symbol).await
    }

    async fn candles(&self, symbol: &str) -> Result<CandleSeries, FetchError> {
        self.get("candle", symbol).await
    }
}
