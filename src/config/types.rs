//! Configuration type definitions
//!
//! This module contains all the struct definitions for configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use super::defaults::*;

// ============================================
// LOGGING CONFIG
// ============================================

/// Where and how much to log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// tracing-subscriber filter directive (e.g. "debug,launch_kit=trace").
    /// RUST_LOG takes precedence when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Directory for the JSONL log file (default: ~/.launchkit/logs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,
}

impl LoggingConfig {
    pub fn get_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn get_log_dir(&self) -> PathBuf {
        match self.log_dir.as_deref() {
            Some(dir) => PathBuf::from(shellexpand::tilde(dir).as_ref()),
            None => dirs::home_dir()
                .map(|home| home.join(DEFAULT_LOG_DIR))
                .unwrap_or_else(|| std::env::temp_dir().join("launch-kit-logs")),
        }
    }
}

// ============================================
// COMMANDS CONFIG
// ============================================

/// Per-command settings for platform implementation resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandsConfig {
    /// Command name -> implementation name to use instead of the default
    /// (e.g. `{"open": "GioOpenCommandImpl"}`)
    #[serde(default)]
    pub impl_overrides: HashMap<String, String>,
}

// ============================================
// MAIN CONFIG
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
}
