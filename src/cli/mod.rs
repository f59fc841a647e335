//! Command-line interface wiring for ticker-relay.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod lookup;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Finnhub market-data relay and stock lookup", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::Lookup(args) => lookup::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the relay API and static UI.
    Serve(serve::Args),
    /// Fetch one symbol through a relay and print its summary card.
    Lookup(lookup::Args),
}
