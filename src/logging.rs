//! tracing subscriber setup.
//!
//! Logs go to a file so they never draw over the alternate screen. Without
//! a log file no subscriber is installed and events are discarded.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, DEFAULT_LOG_FILTER};

/// Parse a filter directive, falling back to the default on bad input.
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber and replay the config warnings into it.
/// Returns the log file in use, if any.
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init(config: &AppConfig) -> io::Result<Option<PathBuf>> {
    let Some(path) = config.log_file.clone() else {
        return Ok(None);
    };
    let file = open_log_file(&path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            "mock-interview {} starting, backend {}",
            env!("CARGO_PKG_VERSION"),
            config.api.base_url
        );
        for warning in &config.warnings {
            tracing::warn!("{}", warning);
        }
    }
    Ok(Some(path))
}
