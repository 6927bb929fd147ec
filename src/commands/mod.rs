//! Platform-specific command implementations and their resolution.
//!
//! # Architecture
//!
//! - `table` - Typed registry of constructors keyed by (command, platform, name)
//! - `open` - Built-in `open` command for Windows, Linux-like and macOS
//! - `resolver` - Memoizing lookup of the right implementation for this host
//!
//! # Example
//!
//! ```ignore
//! use launch_kit::commands::{ImplementationTable, Resolver};
//!
//! let resolver = Resolver::new(ImplementationTable::builtin());
//! let open = resolver.resolve("open", None)?;
//! let argv = open.instantiate().launch_argv("https://example.com");
//! ```

mod open;
mod resolver;
mod table;

pub use open::{GioOpenCommand, MacOpenCommand, WindowsOpenCommand, XdgOpenCommand};
pub use resolver::{default_impl_name, NotFoundReason, ResolveError, Resolver};
pub use table::{
    CommandConstructor, CommandImpl, ImplementationHandle, ImplementationKey,
    ImplementationTable, Lookup,
};
