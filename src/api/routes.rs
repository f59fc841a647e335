//! HTTP route handlers for Axum.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::error;

use crate::api::types::{CandleSeries, CompanyInfo, ErrorBody};

use super::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Generic 500 response; upstream detail stays in the logs.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    fn upstream(message: &'static str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}

pub async fn stock_quote(
    Path(symbol): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Value> {
    state.relay.get_quote(&symbol).await.map(Json).map_err(|err| {
        error!(%symbol, %err, "quote fetch error");
        ApiError::upstream("Failed to fetch stock data")
    })
}

pub async fn company(
    Path(symbol): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<CompanyInfo> {
    state.relay.get_company(&symbol).await.map(Json).map_err(|err| {
        error!(%symbol, %err, "company fetch error");
        ApiError::upstream("Failed to fetch company data")
    })
}

pub async fn candles(
    Path(symbol): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<CandleSeries> {
    state.relay.get_candles(&symbol).await.map(Json).map_err(|err| {
        error!(%symbol, %err, "candle fetch error");
        ApiError::upstream("Failed to fetch candle data")
    })
}
