#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use ticker_relay::{
    api::{self, AppState},
    data::{finnhub::FinnhubClient, relay::Relay},
};

pub const API_KEY: &str = "test-token";

/// Canned upstream bodies, served as raw text so tests can send broken JSON.
#[derive(Debug, Clone)]
pub struct Canned {
    pub quote: String,
    pub profile: String,
    pub metric: String,
    pub candle: String,
}

impl Default for Canned {
    fn default() -> Self {
        Self {
            quote: aapl_quote().to_string(),
            profile: json!({
                "name": "Apple Inc",
                "exchange": "NASDAQ NMS - GLOBAL MARKET",
                "finnhubIndustry": "Technology",
                "logo": "https://static.example.com/AAPL.png"
            })
            .to_string(),
            metric: json!({
                "metric": {
                    "marketCapitalization": 2739176.6,
                    "peNormalizedAnnual": 28.5,
                    "epsNormalizedAnnual": 6.13,
                    "dividendYieldIndicatedAnnual": 0.55
                },
                "symbol": "AAPL"
            })
            .to_string(),
            candle: candle_body(10).to_string(),
        }
    }
}

#[derive(Default)]
pub struct StubUpstream {
    pub canned: Canned,
    pub requests: Mutex<Vec<(String, HashMap<String, String>)>>,
}

impl StubUpstream {
    pub fn new(canned: Canned) -> Arc<Self> {
        Arc::new(Self {
            canned,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests_to(&self, path: &str) -> Vec<HashMap<String, String>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, q)| q.clone())
            .collect()
    }
}

pub fn aapl_quote() -> Value {
    json!({"c": 150.25, "d": 1.5, "dp": 1.01, "o": 149, "h": 151, "l": 148.5, "pc": 148.75, "t": 1700000000})
}

/// An "ok" series of `points` daily closes starting at 1700000000.
pub fn candle_body(points: usize) -> Value {
    let t: Vec<i64> = (0..points as i64).map(|i| 1_700_000_000 + i * 86_400).collect();
    let c: Vec<f64> = (0..points).map(|i| 100.0 + i as f64).collect();
    json!({"s": "ok", "t": t, "c": c, "o": c, "h": c, "l": c, "v": c})
}

fn canned(stub: &StubUpstream, path: &str, query: HashMap<String, String>) -> Response {
    stub.requests
        .lock()
        .unwrap()
        .push((path.to_string(), query.clone()));
    if query.get("token").map(String::as_str) != Some(API_KEY) {
        return (StatusCode::UNAUTHORIZED, r#"{"error":"Invalid API key"}"#).into_response();
    }
    let body = match path {
        "quote" => &stub.canned.quote,
        "profile2" => &stub.canned.profile,
        "metric" => &stub.canned.metric,
        _ => &stub.canned.candle,
    };
    ([(header::CONTENT_TYPE, "application/json")], body.clone()).into_response()
}

type Params = Query<HashMap<String, String>>;

async fn quote(State(stub): State<Arc<StubUpstream>>, Query(q): Params) -> Response {
    canned(&stub, "quote", q)
}

async fn profile(State(stub): State<Arc<StubUpstream>>, Query(q): Params) -> Response {
    canned(&stub, "profile2", q)
}

async fn metric(State(stub): State<Arc<StubUpstream>>, Query(q): Params) -> Response {
    canned(&stub, "metric", q)
}

async fn candle(State(stub): State<Arc<StubUpstream>>, Query(q): Params) -> Response {
    canned(&stub, "candle", q)
}

pub fn upstream_router(stub: Arc<StubUpstream>) -> Router {
    Router::new()
        .route("/quote", get(quote))
        .route("/stock/profile2", get(profile))
        .route("/stock/metric", get(metric))
        .route("/stock/candle", get(candle))
        .with_state(stub)
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn spawn_upstream(canned: Canned) -> (String, Arc<StubUpstream>) {
    let stub = StubUpstream::new(canned);
    let url = spawn(upstream_router(stub.clone())).await;
    (url, stub)
}

pub fn relay_for(upstream_url: &str) -> Relay {
    Relay::new(FinnhubClient::new(upstream_url, API_KEY).unwrap())
}

pub fn relay_router(upstream_url: &str, static_dir: &std::path::Path) -> Router {
    api::router(
        AppState {
            relay: relay_for(upstream_url),
        },
        static_dir,
    )
}
