//! Finnhub market-data relay with a small stock summary client.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod view;
