//! Presentation client: fetch, merge and render one stock at a time.

pub mod chart;
pub mod client;
pub mod format;
pub mod render;
pub mod summary;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex, MutexGuard, PoisonError,
};

use askama::Template;
use tracing::{error, info, instrument, warn};

use crate::{data::MarketData, error::LookupError};

use self::{
    chart::{ChartPanel, ChartSeries},
    render::CardTemplate,
    summary::Summary,
};

/// Notice shown for an empty symbol.
pub const EMPTY_SYMBOL_NOTICE: &str = "Please enter a stock symbol.";
/// Notice shown for every failed lookup.
pub const FAILURE_NOTICE: &str = "Unable to fetch stock/company data. Check symbol or server logs.";

/// Everything a stock view displays.
#[derive(Debug, Default)]
pub struct ViewState {
    pub loading: bool,
    pub card: Option<Summary>,
    pub chart: ChartPanel,
    pub notice: Option<String>,
}

/// Result of one trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered { charted: bool },
    MissingSymbol,
    Busy,
    Failed,
}

/// One stock view over a [`MarketData`] source.
pub struct Dashboard<S> {
    source: S,
    in_flight: AtomicBool,
    state: Mutex<ViewState>,
}

impl<S: MarketData> Dashboard<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            in_flight: AtomicBool::new(false),
            state: Mutex::new(ViewState::default()),
        }
    }

    /// Look up `input` and render it; ignored while another lookup runs.
    #[instrument(skip(self))]
    pub async fn lookup(&self, input: &str) -> Outcome {
        let symbol = input.trim().to_uppercase();
        if symbol.is_empty() {
            self.view().notice = Some(EMPTY_SYMBOL_NOTICE.to_string());
            return Outcome::MissingSymbol;
        }
        let Some(_busy) = InFlight::begin(self) else {
            warn!(%symbol, "lookup already in flight; trigger ignored");
            return Outcome::Busy;
        };

        match self.fetch_and_render(&symbol).await {
            Ok(charted) => {
                info!(%symbol, charted, "stock rendered");
                Outcome::Rendered { charted }
            }
            Err(err) => {
                error!(%symbol, %err, "fetch/render error");
                self.view().notice = Some(FAILURE_NOTICE.to_string());
                Outcome::Failed
            }
        }
    }

    async fn fetch_and_render(&self, symbol: &str) -> Result<bool, LookupError> {
        let (quote, company, candles) = futures::try_join!(
            self.source.quote(symbol),
            self.source.company(symbol),
            self.source.candles(symbol)
        )?;

        let summary = Summary::build(symbol, &quote, &company)?;
        let series = ChartSeries::from_candles(symbol, &candles);

        let mut view = self.view();
        view.card = Some(summary);
        match series {
            Some(series) => {
                view.chart.render_series(series);
                Ok(true)
            }
            None => {
                warn!(%symbol, "no candle data available to draw chart");
                view.chart.clear();
                Ok(false)
            }
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Read the current view state.
    pub fn with_view<R>(&self, read: impl FnOnce(&ViewState) -> R) -> R {
        read(&self.view())
    }

    /// The visible card as text, if one is showing.
    pub fn render(&self) -> Result<Option<String>, askama::Error> {
        let view = self.view();
        match &view.card {
            Some(summary) => CardTemplate::new(summary, view.chart.current())
                .render()
                .map(Some),
            None => Ok(None),
        }
    }

    fn view(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Marks a lookup as running; dropping it clears the loading indicator.
struct InFlight<'a> {
    state: &'a Mutex<ViewState>,
    flag: &'a AtomicBool,
}

impl<'a> InFlight<'a> {
    fn begin<S>(dashboard: &'a Dashboard<S>) -> Option<Self> {
        dashboard
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        let mut view = dashboard.state.lock().unwrap_or_else(PoisonError::into_inner);
        view.card = None;
        view.notice = None;
        view.loading = true;
        Some(Self {
            state: &dashboard.state,
            flag: &dashboard.in_flight,
        })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .loading = false;
        self.flag.store(false, Ordering::Release);
    }
}
