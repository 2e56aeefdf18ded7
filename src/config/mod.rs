//! Configuration module for receiptbook
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ClientPaths;
pub use settings::Settings;
