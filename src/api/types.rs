//! Shared DTOs for JSON responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status flag used when no usable series exists.
pub const NO_DATA: &str = "no_data";

/// Company profile plus the inner `metric` object of the metrics response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(default)]
    pub profile: Value,
    #[serde(default)]
    pub metrics: Map<String, Value>,
}

/// Daily close prices with their UNIX timestamps, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<String>,
    #[serde(default)]
    pub t: Vec<i64>,
    #[serde(default)]
    pub c: Vec<f64>,
}

impl CandleSeries {
    /// Sentinel returned when the upstream series is unusable.
    pub fn no_data() -> Self {
        Self {
            s: Some(NO_DATA.to_string()),
            t: Vec::new(),
            c: Vec::new(),
        }
    }

    /// True when the series can be drawn as a chart.
    pub fn is_plottable(&self) -> bool {
        self.s.as_deref() == Some("ok") && !self.t.is_empty() && !self.c.is_empty()
    }
}

/// Body of every relay failure response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
