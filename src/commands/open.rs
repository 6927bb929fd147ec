//! Built-in `open` command: hand a shortcut target to the platform's default handler.

use crate::platform::PlatformFamily;

use super::table::{CommandImpl, ImplementationTable};

const COMMAND: &str = "open";

/// Windows: `cmd /C start "" <target>`. The empty string is the window title,
/// otherwise `start` treats a quoted target as the title.
pub struct WindowsOpenCommand;

impl CommandImpl for WindowsOpenCommand {
    fn command_name(&self) -> &'static str {
        COMMAND
    }

    fn platform(&self) -> PlatformFamily {
        PlatformFamily::Windows
    }

    fn launch_argv(&self, target: &str) -> Vec<String> {
        ["cmd", "/C", "start", "", target]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

/// Linux and BSD desktops via `xdg-open`.
pub struct XdgOpenCommand;

impl CommandImpl for XdgOpenCommand {
    fn command_name(&self) -> &'static str {
        COMMAND
    }

    fn platform(&self) -> PlatformFamily {
        PlatformFamily::Linux
    }

    fn launch_argv(&self, target: &str) -> Vec<String> {
        vec!["xdg-open".to_string(), target.to_string()]
    }
}

/// GNOME-based desktops where `xdg-open` is missing or misconfigured.
pub struct GioOpenCommand;

impl CommandImpl for GioOpenCommand {
    fn command_name(&self) -> &'static str {
        COMMAND
    }

    fn platform(&self) -> PlatformFamily {
        PlatformFamily::Linux
    }

    fn launch_argv(&self, target: &str) -> Vec<String> {
        vec!["gio".to_string(), "open".to_string(), target.to_string()]
    }
}

/// macOS via `open`.
pub struct MacOpenCommand;

impl CommandImpl for MacOpenCommand {
    fn command_name(&self) -> &'static str {
        COMMAND
    }

    fn platform(&self) -> PlatformFamily {
        PlatformFamily::MacOS
    }

    fn launch_argv(&self, target: &str) -> Vec<String> {
        vec!["open".to_string(), target.to_string()]
    }
}

fn windows_open() -> Box<dyn CommandImpl> {
    Box::new(WindowsOpenCommand)
}

fn xdg_open() -> Box<dyn CommandImpl> {
    Box::new(XdgOpenCommand)
}

fn gio_open() -> Box<dyn CommandImpl> {
    Box::new(GioOpenCommand)
}

fn mac_open() -> Box<dyn CommandImpl> {
    Box::new(MacOpenCommand)
}

pub(super) fn register(table: &mut ImplementationTable) {
    table.register(COMMAND, PlatformFamily::Windows, "OpenCommandImpl", windows_open);
    table.register(COMMAND, PlatformFamily::Linux, "OpenCommandImpl", xdg_open);
    table.register(COMMAND, PlatformFamily::Linux, "GioOpenCommandImpl", gio_open);
    table.register(COMMAND, PlatformFamily::MacOS, "OpenCommandImpl", mac_open);
}
