//! Path management for receiptbook
//!
//! ## Path Resolution Order
//!
//! 1. `RECEIPTBOOK_HOME` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/receiptbook` on Linux,
//!    `~/Library/Application Support/receiptbook` on macOS,
//!    `%APPDATA%\receiptbook\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ClientError;

/// Environment variable that overrides the base directory
pub const HOME_ENV: &str = "RECEIPTBOOK_HOME";

/// Manages all paths used by receiptbook
#[derive(Debug, Clone)]
pub struct ClientPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl ClientPaths {
    /// Create a new ClientPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ClientError> {
        let base_dir = if let Ok(custom) = std::env::var(HOME_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ClientPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("receiptbook.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ClientError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ClientError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, ClientError> {
    ProjectDirs::from("", "", "receiptbook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ClientError::Config("Could not determine a home directory".into()))
}
