//! Summary card model built from a quote and company info.

use std::fmt;

use serde_json::{Map, Value};

use crate::{
    api::types::CompanyInfo,
    error::LookupError,
    view::format::{self, PLACEHOLDER},
};

/// Colour tone of the price and change lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    pub fn from_change(delta: f64) -> Self {
        if delta >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Self::Positive => "▲",
            Self::Negative => "▼",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => f.write_str("positive"),
            Self::Negative => f.write_str("negative"),
        }
    }
}

/// Display-ready strings for one symbol; absent fields already hold "N/A".
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub symbol: String,
    pub title: String,
    pub subtitle: String,
    pub logo: Option<String>,
    pub tone: Tone,
    pub price: String,
    pub change: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub prev_close: String,
    pub market_cap: String,
    pub pe_ratio: String,
    pub eps: String,
    pub dividend_yield: String,
}

impl Summary {
    /// Fails only when the quote lacks a numeric current price.
    pub fn build(symbol: &str, quote: &Value, company: &CompanyInfo) -> Result<Self, LookupError> {
        let price = quote
            .get("c")
            .and_then(Value::as_f64)
            .ok_or(LookupError::QuoteUnavailable)?;
        let field = |key: &str| quote.get(key).and_then(Value::as_f64);
        let money = |key: &str| field(key).map(format::dollars).unwrap_or_else(na);

        let change = match (field("d"), field("dp")) {
            (Some(delta), Some(percent)) => format::change(delta, percent),
            _ => na(),
        };
        let profile = company.profile.as_object();
        let text = |key: &str| {
            profile
                .and_then(|p| p.get(key))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        };

        let subtitle = match (text("exchange"), text("finnhubIndustry")) {
            (Some(exchange), Some(industry)) => format!("{exchange} • {industry}"),
            (Some(exchange), None) => exchange.to_string(),
            (None, Some(industry)) => format!("• {industry}"),
            (None, None) => String::new(),
        };

        let metrics = &company.metrics;
        Ok(Self {
            symbol: symbol.to_string(),
            title: text("name").unwrap_or(symbol).to_string(),
            subtitle,
            logo: text("logo").map(str::to_owned),
            tone: Tone::from_change(field("d").unwrap_or(0.0)),
            price: format::dollars(price),
            change,
            open: money("o"),
            high: money("h"),
            low: money("l"),
            prev_close: money("pc"),
            market_cap: metric_nonzero(metrics, "marketCapitalization")
                .map(|cap| format!("${}", format::grouped(cap)))
                .unwrap_or_else(na),
            pe_ratio: format::display_value(metrics.get("peNormalizedAnnual")).unwrap_or_else(na),
            eps: format::display_value(metrics.get("epsNormalizedAnnual")).unwrap_or_else(na),
            dividend_yield: metric_nonzero(metrics, "dividendYieldIndicatedAnnual")
                .map(|pct| format!("{pct:.2}%"))
                .unwrap_or_else(na),
        })
    }
}

fn metric_nonzero(metrics: &Map<String, Value>, key: &str) -> Option<f64> {
    format::nonzero(metrics.get(key))
}

fn na() -> String {
    PLACEHOLDER.to_string()
}
