//! Launcher shortcut records and the registry that tracks them.
//!
//! This module provides:
//! - Validated shortcut records (executables, folders, URLs, control-panel items, documents)
//! - An ordered registry that records when it last structurally changed
//! - A thread-safe handle for sharing the registry across threads
//!
//! # Example
//!
//! ```ignore
//! use launch_kit::shortcuts::{ShortcutKind, ShortcutRecord, ShortcutRegistry};
//!
//! let mut registry = ShortcutRegistry::new();
//! let seen = registry.updated_at();
//!
//! let record = ShortcutRecord::new(
//!     "Firefox",
//!     ShortcutKind::Executable,
//!     Some("/usr/bin/firefox".into()),
//!     Some("firefox.desktop".into()),
//! )?;
//! registry.insert("firefox", record);
//!
//! // Re-render only when something changed
//! if registry.is_updated_since(seen) { /* ... */ }
//! ```

mod registry;
mod shared;
mod types;

pub use registry::{RegistryError, ShortcutRegistry};
pub use shared::SharedShortcutRegistry;
pub use types::{ShortcutError, ShortcutFlags, ShortcutKind, ShortcutRecord};
