//! Structured JSONL logging to a file plus human-readable stderr output.
//!
//! - **JSONL to file** (`~/.launchkit/logs/launch-kit.jsonl` by default)
//! - **Compact to stderr** for whoever is running the process
//!
//! # Usage
//!
//! ```rust,ignore
//! use launch_kit::{config, logging};
//!
//! let config = config::load_config();
//! // Keep the guard alive for the duration of the program
//! let _guard = logging::init(&config.logging);
//!
//! tracing::info!(event_type = "shortcut_registry", "Registry loaded");
//! ```
//!
//! # JSONL Output Format
//!
//! ```json
//! {"timestamp":"2026-01-05T10:30:45.123Z","level":"INFO","target":"launch_kit::commands::resolver","fields":{"message":"Command platform detected","event_type":"command_resolver","platform":"linux"}}
//! ```

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LoggingConfig, DEFAULT_LOG_FILE_NAME};

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the dual-output logging system.
///
/// The filter comes from `RUST_LOG` when set, otherwise from config. If the
/// log file can't be opened, file output is discarded and stderr still works.
/// Calling this twice leaves the first subscriber installed.
pub fn init(config: &LoggingConfig) -> LoggingGuard {
    let log_path = log_path_in(&config.get_log_dir());
    let file = open_log_file(&log_path);

    let (non_blocking_file, file_guard) = match file {
        Ok(file) => tracing_appender::non_blocking(file),
        Err(e) => {
            eprintln!(
                "[LOGGING] Failed to open log file {}: {}",
                log_path.display(),
                e
            );
            tracing_appender::non_blocking(io::sink())
        }
    };

    let env_filter = build_filter(config);

    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE);

    let pretty_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            event_type = "app_lifecycle",
            action = "started",
            log_path = %log_path.display(),
            "Logging initialized"
        );
    }

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// `RUST_LOG` wins; an invalid configured filter falls back to the default.
fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.get_filter()))
        .unwrap_or_else(|e| {
            eprintln!("[LOGGING] Invalid log filter '{}': {}", config.get_filter(), e);
            EnvFilter::new(crate::config::DEFAULT_LOG_FILTER)
        })
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn log_path_in(dir: &Path) -> PathBuf {
    dir.join(DEFAULT_LOG_FILE_NAME)
}

/// Path to the JSONL log file for the given config.
pub fn log_path(config: &LoggingConfig) -> PathBuf {
    log_path_in(&config.get_log_dir())
}
