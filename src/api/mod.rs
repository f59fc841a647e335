//! HTTP layer exposing the relay endpoints and static UI.

pub mod routes;
pub mod types;

use std::{net::SocketAddr, path::Path};

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Settings,
    data::{finnhub::FinnhubClient, relay::Relay},
};

#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
}

/// Build the relay router; unmatched paths fall back to files under `static_dir`.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/stock/:symbol", get(routes::stock_quote))
        .route("/api/company/:symbol", get(routes::company))
        .route("/api/candle/:symbol", get(routes::candles))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let upstream = FinnhubClient::new(&settings.finnhub_base_url, settings.api_key()?)
        .context("building upstream client")?;
    let state = AppState {
        relay: Relay::new(upstream),
    };
    let app = router(state, &settings.static_dir);

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, static_dir = %settings.static_dir.display(), "serving ticker-relay");
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "unable to listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
