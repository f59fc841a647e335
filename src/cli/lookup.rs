//! CLI entry-point for a one-shot stock lookup.

use anyhow::{anyhow, Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    config::Settings,
    data::{finnhub::FinnhubClient, relay::Relay, MarketData},
    view::{client::RelayClient, Dashboard, Outcome},
};

/// Args for the `lookup` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Ticker symbol, case-insensitive.
    pub symbol: String,
    /// Base URL of a running relay.
    #[arg(long, default_value = "http://localhost:3000")]
    pub relay: String,
    /// Talk to Finnhub in-process instead of through a relay.
    #[arg(long)]
    pub direct: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    if args.direct {
        let upstream = FinnhubClient::new(&settings.finnhub_base_url, settings.api_key()?)
            .context("building upstream client")?;
        show(Dashboard::new(Relay::new(upstream)), &args.symbol).await
    } else {
        let client = RelayClient::new(&args.relay).context("building relay client")?;
        show(Dashboard::new(client), &args.symbol).await
    }
}

async fn show<S: MarketData>(dashboard: Dashboard<S>, symbol: &str) -> Result<()> {
    match dashboard.lookup(symbol).await {
        Outcome::Rendered { .. } => {
            let card = dashboard.render()?.context("rendered lookup left no card")?;
            println!("{card}");
            Ok(())
        }
        Outcome::MissingSymbol | Outcome::Failed | Outcome::Busy => {
            let notice = dashboard.with_view(|view| view.notice.clone());
            Err(anyhow!(notice.unwrap_or_else(|| "lookup did not complete".to_string())))
        }
    }
}
