//! Tracing setup. Events go to a log file so they never draw over the TUI.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` first, then the configured level, then `warn`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Returns the warning to report if the log
/// file could not be opened, in which case logging is disabled.
pub fn init(config: &LoggingConfig) -> Option<String> {
    let filter = env_filter(&config.level);

    match open_log_file(&config.file) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .init();
            tracing::info!(path = %config.file.display(), "logging initialized");
            None
        }
        Err(e) => {
            // No stdout/stderr fallback while the TUI owns the terminal
            tracing_subscriber::registry().with(filter).init();
            Some(format!(
                "failed to open log file {}: {e}",
                config.file.display()
            ))
        }
    }
}
