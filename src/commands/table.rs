//! Typed table of per-platform command constructors.
//!
//! Each implementation is registered under `(command, platform, impl_name)`.
//! Resolving a command is a lookup in this table.

use std::collections::HashMap;
use std::fmt;

use crate::platform::PlatformFamily;

use super::open;

/// A platform-specific command implementation.
///
/// Running the command belongs to the dispatch layer; an implementation only
/// describes how a target is launched on its platform.
pub trait CommandImpl: Send + Sync {
    fn command_name(&self) -> &'static str;
    fn platform(&self) -> PlatformFamily;
    /// Program and arguments that launch `target`.
    fn launch_argv(&self, target: &str) -> Vec<String>;
}

pub type CommandConstructor = fn() -> Box<dyn CommandImpl>;

/// Lookup key for a registered implementation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImplementationKey {
    pub command: String,
    pub platform: PlatformFamily,
    pub impl_name: String,
}

impl ImplementationKey {
    pub fn new(
        command: impl Into<String>,
        platform: PlatformFamily,
        impl_name: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            platform,
            impl_name: impl_name.into(),
        }
    }

    /// Dotted form for log lines, `<command>.platform.<module>.<impl_name>`.
    ///
    /// Not unique: names containing dots can collide, so never key anything on it.
    pub fn qualified_name(&self) -> String {
        format!(
            "{}.platform.{}.{}",
            self.command,
            self.platform.module_name(),
            self.impl_name
        )
    }
}

impl fmt::Display for ImplementationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}

/// A resolved implementation: where it came from plus how to build it.
pub struct ImplementationHandle {
    key: ImplementationKey,
    constructor: CommandConstructor,
}

impl ImplementationHandle {
    pub fn new(key: ImplementationKey, constructor: CommandConstructor) -> Self {
        Self { key, constructor }
    }

    pub fn key(&self) -> &ImplementationKey {
        &self.key
    }

    pub fn command(&self) -> &str {
        &self.key.command
    }

    pub fn platform(&self) -> PlatformFamily {
        self.key.platform
    }

    pub fn impl_name(&self) -> &str {
        &self.key.impl_name
    }

    /// Build a fresh command object.
    pub fn instantiate(&self) -> Box<dyn CommandImpl> {
        (self.constructor)()
    }
}

impl fmt::Debug for ImplementationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplementationHandle")
            .field("key", &self.key)
            .field("constructor", &"<fn>")
            .finish()
    }
}

/// Result of a table lookup.
#[derive(Debug)]
pub enum Lookup {
    Found(CommandConstructor),
    /// Nothing registered for this command on this platform
    NoPlatformModule,
    /// The command has implementations on this platform, just not this name
    NoSuchImplementation,
}

/// Registry of command constructors keyed by command, platform and name.
#[derive(Default)]
pub struct ImplementationTable {
    constructors: HashMap<ImplementationKey, CommandConstructor>,
}

impl ImplementationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with every built-in command registered.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        open::register(&mut table);
        table
    }

    /// Register a constructor. A later registration for the same key replaces
    /// the earlier one.
    pub fn register(
        &mut self,
        command: &str,
        platform: PlatformFamily,
        impl_name: &str,
        constructor: CommandConstructor,
    ) {
        self.constructors.insert(
            ImplementationKey::new(command, platform, impl_name),
            constructor,
        );
    }

    pub fn lookup(&self, key: &ImplementationKey) -> Lookup {
        if let Some(&constructor) = self.constructors.get(key) {
            return Lookup::Found(constructor);
        }
        let has_platform_module = self
            .constructors
            .keys()
            .any(|k| k.command == key.command && k.platform == key.platform);
        if has_platform_module {
            Lookup::NoSuchImplementation
        } else {
            Lookup::NoPlatformModule
        }
    }

    /// Implementation names registered for a command on a platform, sorted.
    pub fn implementations(&self, command: &str, platform: PlatformFamily) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .constructors
            .keys()
            .filter(|k| k.command == command && k.platform == platform)
            .map(|k| k.impl_name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}
