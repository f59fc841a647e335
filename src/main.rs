//! Entry point wiring CLI dispatch to the relay and lookup commands.

use anyhow::Result;
use ticker_relay::{cli::Cli, config::Settings, logging};
use tracing::{info, instrument};

#[tokio::main]
#[instrument]
async fn main() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load()?;
    let cli = Cli::parse();

    info!(?cli, ?settings, "starting command");
    cli.dispatch(settings).await
}
