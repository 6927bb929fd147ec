//! Per-platform command resolution with memoization.
//!
//! A [`Resolver`] owns an [`ImplementationTable`] and a cache. The first
//! `resolve` for a given (command, implementation name) looks the constructor
//! up in the table; every later call returns the same `Arc` without touching
//! the table again.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::{error, info};

use crate::config::CommandsConfig;
use crate::platform::{PlatformFamily, PlatformUnsupportedError};

use super::table::{ImplementationHandle, ImplementationKey, ImplementationTable, Lookup};

/// Why a lookup came back empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The command has no implementations at all for this platform
    NoPlatformModule,
    /// The platform has implementations of the command, but not this one
    NoSuchImplementation,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPlatformModule => write!(f, "no platform module"),
            Self::NoSuchImplementation => write!(f, "no such implementation"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    PlatformUnsupported(#[from] PlatformUnsupportedError),

    #[error("cannot resolve '{impl_name}' for command '{command}' on {platform}: {reason}")]
    ImplementationNotFound {
        command: String,
        platform: PlatformFamily,
        impl_name: String,
        reason: NotFoundReason,
    },
}

impl ResolveError {
    /// Unsupported platform stops every command; a missing implementation only its own.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::PlatformUnsupported(_))
    }
}

/// Default implementation name for a command: `open` -> `OpenCommandImpl`.
pub fn default_impl_name(command: &str) -> String {
    format!("{}CommandImpl", title_case(command))
}

/// Upper-case the first letter of every alphabetic run and lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Resolves logical command names to platform implementations.
///
/// The platform is detected once, at construction. Share one resolver with
/// `Arc<Resolver>` when several threads dispatch commands.
pub struct Resolver {
    table: ImplementationTable,
    platform: Result<PlatformFamily, PlatformUnsupportedError>,
    impl_overrides: HashMap<String, String>,
    cache: Mutex<HashMap<ImplementationKey, Arc<ImplementationHandle>>>,
    lookups: AtomicUsize,
}

impl Resolver {
    /// Resolver for the platform this binary runs on.
    pub fn new(table: ImplementationTable) -> Self {
        Self::with_platform(table, std::env::consts::OS, PlatformFamily::current())
    }

    /// Resolver for an explicit OS identifier.
    pub fn for_os(table: ImplementationTable, os: &str) -> Self {
        Self::with_platform(table, os, PlatformFamily::from_os(os))
    }

    fn with_platform(
        table: ImplementationTable,
        os: &str,
        platform: Result<PlatformFamily, PlatformUnsupportedError>,
    ) -> Self {
        match &platform {
            Ok(family) => info!(
                event_type = "command_resolver",
                action = "platform_detected",
                os = os,
                platform = %family,
                "Command platform detected"
            ),
            Err(e) => error!(
                event_type = "command_resolver",
                action = "platform_unsupported",
                os = os,
                error = %e,
                "Platform unsupported, platform commands are unavailable"
            ),
        }
        Self {
            table,
            platform,
            impl_overrides: HashMap::new(),
            cache: Mutex::new(HashMap::new()),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Apply per-command implementation overrides from config.
    pub fn with_config(mut self, config: &CommandsConfig) -> Self {
        self.impl_overrides = config.impl_overrides.clone();
        self
    }

    pub fn platform(&self) -> Result<PlatformFamily, ResolveError> {
        self.platform.clone().map_err(ResolveError::from)
    }

    /// Resolve `command` to its implementation for the current platform.
    ///
    /// `impl_name` defaults to [`default_impl_name`]. Failures are not cached.
    pub fn resolve(
        &self,
        command: &str,
        impl_name: Option<&str>,
    ) -> Result<Arc<ImplementationHandle>, ResolveError> {
        let platform = self.platform()?;
        let impl_name = match impl_name.filter(|name| !name.is_empty()) {
            Some(name) => name.to_string(),
            None => default_impl_name(command),
        };
        let key = ImplementationKey::new(command, platform, impl_name);

        // Held across lookup and store so racing first callers do one lookup.
        let mut cache = self.cache.lock();
        if let Some(handle) = cache.get(&key) {
            return Ok(Arc::clone(handle));
        }

        info!(
            event_type = "command_resolver",
            action = "lookup",
            command = command,
            platform = %platform,
            impl_name = %key.impl_name,
            "Loading command platform implementation {}",
            key
        );
        self.lookups.fetch_add(1, Ordering::Relaxed);

        let constructor = match self.table.lookup(&key) {
            Lookup::Found(constructor) => constructor,
            Lookup::NoPlatformModule => {
                return Err(not_found(key, NotFoundReason::NoPlatformModule));
            }
            Lookup::NoSuchImplementation => {
                return Err(not_found(key, NotFoundReason::NoSuchImplementation));
            }
        };

        let handle = Arc::new(ImplementationHandle::new(key.clone(), constructor));
        cache.insert(key, Arc::clone(&handle));
        Ok(handle)
    }

    /// Resolve using the configured implementation name for `command`, if any.
    pub fn resolve_command(
        &self,
        command: &str,
    ) -> Result<Arc<ImplementationHandle>, ResolveError> {
        let impl_name = self.impl_overrides.get(command).map(String::as_str);
        self.resolve(command, impl_name)
    }

    /// Number of table lookups performed so far (cache misses).
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Number of cached implementations.
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }
}

fn not_found(key: ImplementationKey, reason: NotFoundReason) -> ResolveError {
    let err = ResolveError::ImplementationNotFound {
        command: key.command,
        platform: key.platform,
        impl_name: key.impl_name,
        reason,
    };
    error!(
        event_type = "command_resolver",
        action = "not_found",
        error = %err,
        "Command implementation not found"
    );
    err
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
