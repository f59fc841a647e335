//! Text rendering of the summary card through askama.

use askama::Template;

use crate::view::{chart::Chart, format, summary::Summary};

pub struct ChartRow {
    pub label: String,
    pub close: String,
}

#[derive(Template)]
#[template(path = "card.txt")]
pub struct CardTemplate<'a> {
    pub summary: &'a Summary,
    pub chart_title: &'a str,
    pub rows: Vec<ChartRow>,
}

impl<'a> CardTemplate<'a> {
    pub fn new(summary: &'a Summary, chart: Option<&'a Chart>) -> Self {
        let (chart_title, rows) = match chart {
            Some(chart) => (
                chart.series.title.as_str(),
                chart
                    .series
                    .points()
                    .map(|(label, close)| ChartRow {
                        label: label.to_string(),
                        close: format::dollars(close),
                    })
                    .collect(),
            ),
            None => ("", Vec::new()),
        };
        Self {
            summary,
            chart_title,
            rows,
        }
    }
}
