use thiserror::Error;
use tracing::{error, warn};

use crate::commands::ResolveError;
use crate::shortcuts::{RegistryError, ShortcutError};

/// Error severity for user-facing reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,  // recoverable
    Error,    // operation failed
    Critical, // nothing platform-specific can run
}

/// Crate-level error wrapping every component's failures.
#[derive(Error, Debug)]
pub enum LaunchKitError {
    #[error("Invalid shortcut: {0}")]
    Shortcut(#[from] ShortcutError),

    #[error("Shortcut registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Command resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LaunchKitError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Shortcut(_) => ErrorSeverity::Warning,
            Self::Registry(_) => ErrorSeverity::Warning,
            Self::Resolve(e) if e.is_fatal() => ErrorSeverity::Critical,
            Self::Resolve(_) => ErrorSeverity::Error,
            Self::Config(_) => ErrorSeverity::Warning,
            Self::Io(_) => ErrorSeverity::Error,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Shortcut(e) => format!("Shortcut could not be created: {}", e),
            Self::Registry(RegistryError::KeyNotFound(key)) => {
                format!("No shortcut named '{}'", key)
            }
            Self::Resolve(ResolveError::PlatformUnsupported(e)) => format!(
                "Commands are unavailable on this system ({})",
                e.os
            ),
            Self::Resolve(ResolveError::ImplementationNotFound { command, .. }) => {
                format!("Command '{}' is not available on this system", command)
            }
            Self::Config(msg) => format!("Configuration issue: {}", msg),
            Self::Io(e) => format!("File access failed: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchKitError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the caller doesn't need the error.
///
/// # Examples
///
/// ```ignore
/// use launch_kit::error::ResultExt;
///
/// // Keep going with the remaining shortcuts if one is malformed
/// let record = ShortcutRecord::from_code(name, code, target, file).warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::NotFoundReason;
    use crate::platform::{PlatformFamily, PlatformUnsupportedError};
    use crate::shortcuts::ShortcutKind;

    fn unsupported() -> LaunchKitError {
        LaunchKitError::from(ResolveError::from(PlatformUnsupportedError {
            os: "solaris".to_string(),
        }))
    }

    fn missing_command() -> LaunchKitError {
        LaunchKitError::from(ResolveError::ImplementationNotFound {
            command: "reveal".to_string(),
            platform: PlatformFamily::Linux,
            impl_name: "RevealCommandImpl".to_string(),
            reason: NotFoundReason::NoPlatformModule,
        })
    }

    #[test]
    fn test_unsupported_platform_is_critical() {
        assert_eq!(unsupported().severity(), ErrorSeverity::Critical);
        assert!(unsupported().user_message().contains("solaris"));
    }

    #[test]
    fn test_missing_command_is_error() {
        let err = missing_command();
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert_eq!(
            err.user_message(),
            "Command 'reveal' is not available on this system"
        );
    }

    #[test]
    fn test_shortcut_and_registry_errors_are_warnings() {
        let shortcut = LaunchKitError::from(ShortcutError::MissingTarget {
            name: "home".to_string(),
            kind: ShortcutKind::Url,
        });
        assert_eq!(shortcut.severity(), ErrorSeverity::Warning);

        let registry = LaunchKitError::from(RegistryError::KeyNotFound("gone".to_string()));
        assert_eq!(registry.severity(), ErrorSeverity::Warning);
        assert_eq!(registry.user_message(), "No shortcut named 'gone'");
    }

    #[test]
    fn test_display_includes_source() {
        let err = LaunchKitError::from(RegistryError::KeyNotFound("gone".to_string()));
        assert!(err.to_string().starts_with("Shortcut registry error:"));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_config_and_io_errors() {
        let config = LaunchKitError::Config("bad json".to_string());
        assert_eq!(config.severity(), ErrorSeverity::Warning);
        assert_eq!(config.user_message(), "Configuration issue: bad json");

        let io = LaunchKitError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(io.severity(), ErrorSeverity::Error);
        assert!(io.user_message().contains("denied"));
    }

    #[test]
    fn test_result_ext() {
        let ok: std::result::Result<u32, String> = Ok(7);
        assert_eq!(ok.log_err(), Some(7));

        let err: std::result::Result<u32, String> = Err("boom".to_string());
        assert_eq!(err.warn_on_err(), None);
    }
}
