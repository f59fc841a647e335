//! Upstream access and response reshaping.

pub mod candles;
pub mod finnhub;
pub mod relay;

use std::future::Future;

use serde_json::Value;

use crate::{
    api::types::{CandleSeries, CompanyInfo},
    error::FetchError,
};

/// The three read operations a stock view is assembled from.
///
/// Implemented in-process by [`relay::Relay`] and over HTTP by
/// [`crate::view::client::RelayClient`].
pub trait MarketData {
    fn quote(&self, symbol: &str) -> impl Future<Output = Result<Value, FetchError>> + Send;

    fn company(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<CompanyInfo, FetchError>> + Send;

    fn candles(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<CandleSeries, FetchError>> + Send;
}
