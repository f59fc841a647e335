//! Line-chart series and the panel that owns the single live chart.

use tracing::debug;

use crate::{api::types::CandleSeries, view::format};

/// Labels/values pair handed to a charting backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// `None` unless the series has status "ok" and data in both columns.
    pub fn from_candles(symbol: &str, candles: &CandleSeries) -> Option<Self> {
        if !candles.is_plottable() {
            return None;
        }
        Some(Self {
            title: format!("{symbol} last 7 trading days"),
            labels: candles.t.iter().copied().map(format::short_date).collect(),
            values: candles.c.clone(),
        })
    }

    /// Label/value pairs in chronological order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// A rendered chart; `id` changes every time the panel redraws.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub id: u64,
    pub series: ChartSeries,
}

/// Holds at most one chart at a time.
#[derive(Debug, Default)]
pub struct ChartPanel {
    drawn: u64,
    current: Option<Chart>,
}

impl ChartPanel {
    /// Dispose of any previous chart and draw `series` in its place.
    pub fn render_series(&mut self, series: ChartSeries) -> &Chart {
        self.clear();
        self.drawn += 1;
        debug!(chart = self.drawn, points = series.values.len(), "chart drawn");
        self.current.insert(Chart {
            id: self.drawn,
            series,
        })
    }

    pub fn clear(&mut self) {
        if let Some(old) = self.current.take() {
            debug!(chart = old.id, "chart disposed");
        }
    }

    pub fn current(&self) -> Option<&Chart> {
        self.current.as_ref()
    }
}
