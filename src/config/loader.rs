//! Configuration loading from file system
//!
//! Handles loading and parsing the JSON config file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::Config;
use crate::error::{LaunchKitError, Result};

/// Path of the user config file (~/.launchkit/config.json)
pub fn config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref())
}

/// Load configuration from ~/.launchkit/config.json
///
/// Returns Config::default() if the file is missing or invalid.
pub fn load_config() -> Config {
    load_config_from(&config_path())
}

/// Load configuration from an explicit path, reporting problems to the caller.
///
/// A missing file is not an error and yields defaults. An unreadable file is
/// `LaunchKitError::Io`; invalid JSON is `LaunchKitError::Config`.
pub fn try_load_config_from(path: &Path) -> Result<Config> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Config::default());
        }
        Err(e) => return Err(LaunchKitError::Io(e)),
    };

    let config = serde_json::from_str::<Config>(&content).map_err(|e| {
        // Point at the most common mistake
        let hint = if e.to_string().contains("invalid type: string") {
            " (hint: 'implOverrides' maps command names to implementation names, \
            e.g. {\"commands\": {\"implOverrides\": {\"open\": \"GioOpenCommandImpl\"}}})"
        } else {
            ""
        };
        LaunchKitError::Config(format!("{}: {}{}", path.display(), e, hint))
    })?;

    info!(path = %path.display(), "Successfully loaded config");
    Ok(config)
}

/// Load configuration from an explicit path.
///
/// Missing file is normal (defaults, logged at info). Unreadable or invalid
/// JSON falls back to defaults with a warning.
#[instrument(name = "load_config", skip_all, fields(path = %path.display()))]
pub fn load_config_from(path: &Path) -> Config {
    match try_load_config_from(path) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    }
}
