//! Configuration for the netscope client.
//!
//! Loads settings from a TOML file when present, falling back to defaults.
//! CLI flags override individual fields after loading.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Default config file path.
pub const CONFIG_PATH: &str = "/etc/netscope/config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the capture backend.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Cadence of the periodic refresh in seconds.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Time window selected at startup, in minutes.
    #[serde(default = "default_minutes")]
    pub default_minutes: u32,

    /// Per-request HTTP timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_refresh_interval() -> u64 {
    30
}

fn default_minutes() -> u32 {
    60
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            refresh_interval_secs: default_refresh_interval(),
            default_minutes: default_minutes(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Config {
    /// Load from `path` when given, else `$NETSCOPE_CONFIG`, else the default
    /// path. A missing file is normal and yields defaults; a present but
    /// invalid file is an error.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_string(),
            None => std::env::var("NETSCOPE_CONFIG").unwrap_or_else(|_| CONFIG_PATH.to_string()),
        };

        if !Path::new(&path).exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path))?;
        info!("Loaded configuration from {}", path);
        Ok(config)
    }

    /// The time window is a positive minute count; zero would scope every
    /// request to an empty window.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.default_minutes >= 1,
            "default_minutes must be a positive number of minutes"
        );
        anyhow::ensure!(
            self.refresh_interval_secs >= 1,
            "refresh_interval_secs must be at least 1"
        );
        anyhow::ensure!(
            self.request_timeout_secs >= 1,
            "request_timeout_secs must be at least 1"
        );
        Ok(())
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
