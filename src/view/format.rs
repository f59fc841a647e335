//! Number formatting for the summary card.

use chrono::DateTime;
use serde_json::Value;

/// Placeholder for any absent optional field.
pub const PLACEHOLDER: &str = "N/A";

/// `$150.25`
pub fn dollars(value: f64) -> String {
    format!("${value:.2}")
}

/// `+1.50 (1.01%)`, with the sign only spelled out for non-negative changes.
pub fn change(delta: f64, percent: f64) -> String {
    let sign = if delta >= 0.0 { "+" } else { "" };
    format!("{sign}{delta:.2} ({percent:.2}%)")
}

/// en-US grouping with at most three fraction digits, e.g. `2,739,176.6`.
pub fn grouped(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    for (idx, digit) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    if value < 0.0 && out.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
        out.insert(0, '-');
    }
    out
}

/// Shortest plain rendering of a number: `28`, `28.5`, `-0.03`.
pub fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Any non-null JSON value as display text.
pub fn display_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::Number(num) => num.as_f64().map(plain_number),
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Numeric value that is present, finite and non-zero.
pub fn nonzero(value: Option<&Value>) -> Option<f64> {
    value
        .and_then(Value::as_f64)
        .filter(|num| num.is_finite() && *num != 0.0)
}

/// `M/D/YYYY` in UTC for a UNIX timestamp in seconds.
pub fn short_date(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|at| at.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
