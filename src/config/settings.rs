//! User settings for receiptbook
//!
//! Holds the API location, the optional request timeout and the log level.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::ClientPaths;
use crate::error::ClientError;

/// User settings for receiptbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the receipts/budgets API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout; `None` waits forever
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Default tracing filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_url: default_api_url(),
            request_timeout_secs: None,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ClientPaths) -> Result<Self, ClientError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ClientError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ClientError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ClientPaths) -> Result<(), ClientError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ClientError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ClientError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Replace the API URL, rejecting values that are obviously not HTTP URLs
    pub fn set_api_url(&mut self, url: &str) -> Result<(), ClientError> {
        let url = url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ClientError::Validation(format!(
                "API URL must start with http:// or https://, got '{}'",
                url
            )));
        }
        self.api_url = url.to_string();
        Ok(())
    }

    /// The configured request timeout, if any
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
