//! Netscope - live network-traffic dashboard client
//!
//! Polls the capture backend's aggregation endpoint and keeps a terminal
//! dashboard (two charts, two tables) reconciled with the latest telemetry
//! snapshot.

pub mod config;
pub mod fetcher;
pub mod logging;
pub mod reconcile;
pub mod scheduler;
pub mod tui;
pub mod view;
