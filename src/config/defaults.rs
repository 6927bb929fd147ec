//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Config file location (tilde-expanded at load time)
pub const DEFAULT_CONFIG_PATH: &str = "~/.launchkit/config.json";

/// Default log directory, relative to the home directory
pub const DEFAULT_LOG_DIR: &str = ".launchkit/logs";

/// JSONL log file name inside the log directory
pub const DEFAULT_LOG_FILE_NAME: &str = "launch-kit.jsonl";

/// Filter used when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "info";
