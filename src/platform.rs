//! Host platform detection.
//!
//! Maps an operating-system identifier onto one of the three platform
//! families that command implementations are written for. Both Rust's
//! `std::env::consts::OS` values (`windows`, `linux`, `macos`, ...) and the
//! conventional `win32` / `darwin` style identifiers are understood.

use std::fmt;

use thiserror::Error;

/// The OS identifier is not one we have implementations for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("platform '{os}' is not supported")]
pub struct PlatformUnsupportedError {
    pub os: String,
}

/// Platform family used to select command implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlatformFamily {
    Windows,
    /// Linux and the BSDs
    Linux,
    MacOS,
}

const LINUX_LIKE_PREFIXES: &[&str] = &["linux", "freebsd", "openbsd", "netbsd", "dragonfly"];

impl PlatformFamily {
    pub const ALL: [PlatformFamily; 3] = [
        PlatformFamily::Windows,
        PlatformFamily::Linux,
        PlatformFamily::MacOS,
    ];

    /// Classify an OS identifier.
    pub fn from_os(os: &str) -> Result<Self, PlatformUnsupportedError> {
        let os_lower = os.trim().to_ascii_lowercase();
        if os_lower.starts_with("win") {
            Ok(Self::Windows)
        } else if LINUX_LIKE_PREFIXES
            .iter()
            .any(|prefix| os_lower.starts_with(prefix))
        {
            Ok(Self::Linux)
        } else if os_lower == "darwin" || os_lower == "macos" {
            Ok(Self::MacOS)
        } else {
            Err(PlatformUnsupportedError { os: os.to_string() })
        }
    }

    /// Family of the platform this binary was built for.
    pub fn current() -> Result<Self, PlatformUnsupportedError> {
        Self::from_os(std::env::consts::OS)
    }

    /// Short module-style name ("win32", "linux", "osx") used in cache keys and logs.
    pub fn module_name(&self) -> &'static str {
        match self {
            Self::Windows => "win32",
            Self::Linux => "linux",
            Self::MacOS => "osx",
        }
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.module_name())
    }
}
