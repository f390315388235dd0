//! Logging setup for applications embedding the toolkit.
//!
//! Toolkit events (`debug!` for rewrites and query changes, `error!` for a
//! missing `live_url`) go to `~/.local/state/siteurl/siteurl.log`. Hosts that
//! cannot open it fall back to [`init_logging_stderr`].

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Log file name inside the state directory.
pub const LOG_FILE_NAME: &str = "siteurl.log";

const DEFAULT_FILTER: &str = "info,siteurl_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// XDG state directory for siteurl logs.
pub fn log_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("siteurl")?;
    Ok(xdg_dirs.get_state_home())
}

/// Installs a global subscriber appending to `siteurl.log` under the XDG state dir.
/// Returns the log file path.
pub fn init_logging() -> Result<PathBuf> {
    init_logging_in(&log_dir()?)
}

/// Installs a global subscriber appending to `<dir>/siteurl.log`, creating `dir`.
/// Fails if the file cannot be opened or a subscriber is already installed.
pub fn init_logging_in(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log dir {}", dir.display()))?;
    let log_file_path = dir.join(LOG_FILE_NAME);

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("failed to open log file {}", log_file_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;

    tracing::info!("siteurl logging initialized at {}", log_file_path.display());
    Ok(log_file_path)
}

/// Logs to stderr only. Does nothing if a global subscriber is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
