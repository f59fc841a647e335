//! CLI entry-point for serving the relay API and static UI.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{api, config::Settings};

/// Run the Axum server.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Port to bind; defaults to the PORT setting (3000).
    #[arg(long)]
    pub port: Option<u16>,
    /// Host address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let port = args.port.unwrap_or(settings.port);
    api::serve(settings, args.host, port).await
}
