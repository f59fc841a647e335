//! Relay operations: one or two upstream calls each, lightly reshaped.

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::{
    api::types::{CandleSeries, CompanyInfo},
    data::{
        candles::{self, CandleWindow},
        finnhub::FinnhubClient,
        MarketData,
    },
    error::FetchError,
};

/// Stateless relay over a configured upstream client.
#[derive(Clone)]
pub struct Relay {
    upstream: FinnhubClient,
}

impl Relay {
    pub fn new(upstream: FinnhubClient) -> Self {
        Self { upstream }
    }

    /// Upstream quote body, unchanged.
    #[instrument(skip(self))]
    pub async fn get_quote(&self, symbol: &str) -> Result<Value, FetchError> {
        self.upstream.quote(symbol).await
    }

    /// Profile and metrics fetched concurrently; either failure fails both.
    #[instrument(skip(self))]
    pub async fn get_company(&self, symbol: &str) -> Result<CompanyInfo, FetchError> {
        let (profile, metrics_raw) = tokio::try_join!(
            self.upstream.profile(symbol),
            self.upstream.metrics(symbol)
        )?;
        Ok(CompanyInfo {
            profile,
            metrics: inner_metric(metrics_raw),
        })
    }

    /// Daily closes for the last two weeks, trimmed to the newest points.
    #[instrument(skip(self))]
    pub async fn get_candles(&self, symbol: &str) -> Result<CandleSeries, FetchError> {
        let window = CandleWindow::ending_at(Utc::now());
        let raw = self.upstream.daily_candles(symbol, window).await?;
        let series = candles::trim_series(&raw);
        debug!(points = series.t.len(), status = ?series.s, "candles trimmed");
        Ok(series)
    }
}

/// The `metric` object of a metrics response, or an empty map.
pub fn inner_metric(raw: Value) -> Map<String, Value> {
    match raw {
        Value::Object(mut body) => match body.remove("metric") {
            Some(Value::Object(metric)) => metric,
            _ => Map::new(),
        },
        _ => Map::new(),
    }
}

impl MarketData for Relay {
    async fn quote(&self, symbol: &str) -> Result<Value, FetchError> {
        self.get_quote(symbol).await
    }

    async fn company(&self, symbol: &str) -> Result<CompanyInfo, FetchError> {
        self.get_company(symbol).await
    }

    async fn candles(&self, symbol: &str) -> Result<CandleSeries, FetchError> {
        self.get_candles(symbol).await
    }
}
