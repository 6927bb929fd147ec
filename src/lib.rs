//! Launch Kit - shortcut registry and platform command resolution for a
//! keyboard-driven launcher.
//!
//! This library provides the non-UI core: a change-tracked registry of
//! learned shortcuts and a memoizing resolver that picks the right
//! platform implementation for each logical command.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod shortcuts;

pub use error::{LaunchKitError, Result};
