//! Tracing setup
//!
//! Logs go to a file under the base directory so they never draw over the
//! TUI. `RUST_LOG` takes precedence over the `log_level` setting.

use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{ClientPaths, Settings};
use crate::error::ClientResult;

/// Install the global subscriber
///
/// Returns the log file path, or `None` when the file could not be opened
/// and warnings are going to stderr instead.
pub fn init(paths: &ClientPaths, settings: &Settings) -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    match open_log_file(paths) {
        Ok(file) => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init();
            Some(paths.log_file())
        }
        Err(e) => {
            let _ = tracing_subscriber::registry()
                .with(EnvFilter::new("warn"))
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init();
            tracing::warn!(error = %e, "log file unavailable, logging to stderr");
            None
        }
    }
}

fn open_log_file(paths: &ClientPaths) -> ClientResult<File> {
    paths.ensure_directories()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())?;
    Ok(file)
}
