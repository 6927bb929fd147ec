//! Configuration module - Application settings and user preferences
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.launchkit/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Config, LoggingConfig, CommandsConfig)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{DEFAULT_LOG_FILE_NAME, DEFAULT_LOG_FILTER};

pub use types::{CommandsConfig, Config, LoggingConfig};

pub use loader::{config_path, load_config, load_config_from, try_load_config_from};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
