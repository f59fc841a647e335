//! Thin Finnhub REST client; every call returns the raw JSON body.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::{data::candles::CandleWindow, error::FetchError};

/// Upstream client holding the credential and API root.
#[derive(Clone)]
pub struct FinnhubClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FinnhubClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("ticker-relay/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub async fn quote(&self, symbol: &str) -> Result<Value, FetchError> {
        self.get("quote", &format!("symbol={}", encode(symbol))).await
    }

    pub async fn profile(&self, symbol: &str) -> Result<Value, FetchError> {
        self.get("stock/profile2", &format!("symbol={}", encode(symbol))).await
    }

    pub async fn metrics(&self, symbol: &str) -> Result<Value, FetchError> {
        let query = format!("symbol={}&metric=all", encode(symbol));
        self.get("stock/metric", &query).await
    }

    pub async fn daily_candles(
        &self,
        symbol: &str,
        window: CandleWindow,
    ) -> Result<Value, FetchError> {
        let query = format!(
            "symbol={symbol}&resolution=D&from={from}&to={to}",
            symbol = encode(symbol),
            from = window.from,
            to = window.to
        );
        self.get("stock/candle", &query).await
    }

    /// Issue one GET and decode the body, ignoring the HTTP status so that
    /// upstream error documents are relayed as-is.
    async fn get(&self, path: &str, query: &str) -> Result<Value, FetchError> {
        let url = format!("{base}/{path}?{query}", base = self.base_url);
        debug!(%path, %query, "upstream request");
        let resp = self
            .client
            .get(format!("{url}&token={}", encode(&self.api_key)))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(%path, %status, "upstream answered with non-success status");
        }
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
