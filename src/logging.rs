//! Logging
//!
//! The TUI owns stdout, so interactive runs only log to a file (and only
//! when asked to). Non-interactive commands log to stderr.

use crate::config::{LoggingConfig, log_dir};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default log file name inside the log directory
const LOG_FILE_NAME: &str = "fediwizard.log";

/// Where log output should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Terminal is taken by the wizard
    Interactive,
    /// Plain command output on stdout, logs on stderr
    Headless,
}

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered file logs are flushed.
pub fn init(config: &LoggingConfig, mode: LogMode, debug: bool) -> Result<Option<WorkerGuard>> {
    // Precedence: RUST_LOG > --debug > config level
    let level = if debug { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fediwizard={}", level)));

    let file = log_file(config, debug);

    let guard = match (file, mode) {
        (Some(path), _) => {
            let (dir, name) = split_log_path(&path);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory: {:?}", dir))?;
            let appender = tracing_appender::rolling::never(&dir, name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);

            let registry = tracing_subscriber::registry().with(filter).with(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false),
            );
            if mode == LogMode::Headless {
                registry
                    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                    .try_init()
                    .context("Failed to install log subscriber")?;
            } else {
                registry
                    .try_init()
                    .context("Failed to install log subscriber")?;
            }
            Some(guard)
        }
        (None, LogMode::Headless) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install log subscriber")?;
            None
        }
        // Nowhere to write without garbling the screen
        (None, LogMode::Interactive) => None,
    };

    tracing::debug!("Logging initialized ({:?})", mode);
    Ok(guard)
}

/// Log file to use: the configured one, or the default when debugging
fn log_file(config: &LoggingConfig, debug: bool) -> Option<PathBuf> {
    match (&config.file, debug) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(log_dir().join(LOG_FILE_NAME)),
        (None, false) => None,
    }
}

fn split_log_path(path: &Path) -> (PathBuf, String) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| LOG_FILE_NAME.to_string());
    (dir, name)
}
