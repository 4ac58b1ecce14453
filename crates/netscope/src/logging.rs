//! Logging setup for the dashboard client.
//!
//! The TUI owns the terminal, so diagnostics go to a log file instead of
//! stdout, discovered with an XDG fallback chain. Stderr is the last resort
//! when no writable path exists.

use anyhow::Result;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Discover the log file path.
///
/// Priority:
/// 1. $NETSCOPE_LOG_FILE (explicit override)
/// 2. $XDG_STATE_HOME/netscope/netscope.log
/// 3. ~/.local/state/netscope/netscope.log
fn discover_log_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("NETSCOPE_LOG_FILE") {
        return Some(PathBuf::from(path));
    }

    if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
        return Some(PathBuf::from(xdg_state).join("netscope/netscope.log"));
    }

    if let Some(home) = dirs::home_dir() {
        return Some(home.join(".local/state/netscope/netscope.log"));
    }

    None
}

/// Initialize tracing once, honoring `RUST_LOG` and defaulting to `info`.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = discover_log_path() {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
            return Ok(());
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
