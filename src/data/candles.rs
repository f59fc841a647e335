//! Candle window computation and series trimming.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use crate::api::types::CandleSeries;

/// Calendar days requested from the upstream candle endpoint.
pub const WINDOW_DAYS: i64 = 14;
/// Most recent points kept after trimming.
pub const MAX_POINTS: usize = 7;

/// Inclusive UNIX-seconds range handed to the upstream candle endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandleWindow {
    pub from: i64,
    pub to: i64,
}

impl CandleWindow {
    pub fn ending_at(now: DateTime<Utc>) -> Self {
        let to = now.timestamp();
        Self {
            from: to - Duration::days(WINDOW_DAYS).num_seconds(),
            to,
        }
    }
}

/// Reshape a raw upstream candle payload into at most [`MAX_POINTS`] points.
///
/// Payloads without numeric `t`/`c` arrays of equal, non-zero length collapse
/// into [`CandleSeries::no_data`] instead of failing.
pub fn trim_series(raw: &Value) -> CandleSeries {
    let Some((t, c)) = parallel_columns(raw) else {
        return CandleSeries::no_data();
    };
    let start = t.len().saturating_sub(MAX_POINTS);
    CandleSeries {
        s: raw.get("s").and_then(Value::as_str).map(str::to_owned),
        t: t[start..].to_vec(),
        c: c[start..].to_vec(),
    }
}

fn parallel_columns(raw: &Value) -> Option<(Vec<i64>, Vec<f64>)> {
    let t = raw
        .get("t")?
        .as_array()?
        .iter()
        .map(Value::as_i64)
        .collect::<Option<Vec<_>>>()?;
    let c = raw
        .get("c")?
        .as_array()?
        .iter()
        .map(Value::as_f64)
        .collect::<Option<Vec<_>>>()?;
    (!t.is_empty() && t.len() == c.len()).then_some((t, c))
}
