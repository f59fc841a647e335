//! Runtime configuration utilities for ticker-relay.

use std::{env, fmt, path::PathBuf};

use anyhow::Context;

/// Default upstream root for Finnhub's v1 REST API.
pub const DEFAULT_FINNHUB_BASE_URL: &str = "https://finnhub.io/api/v1";

/// Application configuration resolved from `.env` and defaults.
#[derive(Clone)]
pub struct Settings {
    /// Finnhub API token; only the relay needs it.
    pub finnhub_key: Option<String>,
    /// Upstream API root, overridable for stubs and proxies.
    pub finnhub_base_url: String,
    /// Port the relay binds by default.
    pub port: u16,
    /// Root folder for browser assets.
    pub static_dir: PathBuf,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let finnhub_key = env::var("FINNHUB_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let finnhub_base_url = env::var("FINNHUB_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_FINNHUB_BASE_URL.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("parsing PORT value {raw:?}"))?,
            Err(_) => 3000,
        };
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Ok(Self {
            finnhub_key,
            finnhub_base_url,
            port,
            static_dir,
        })
    }

    /// The upstream credential, required by anything that talks to Finnhub.
    pub fn api_key(&self) -> anyhow::Result<&str> {
        self.finnhub_key
            .as_deref()
            .context("FINNHUB_KEY is not set; add it to the environment or .env")
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("finnhub_key", &self.finnhub_key.as_ref().map(|_| "<redacted>"))
            .field("finnhub_base_url", &self.finnhub_base_url)
            .field("port", &self.port)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}
