//! Shortcut record types with construction-time validation.
//!
//! This module provides:
//! - `ShortcutKind` - What a shortcut launches (executable, folder, URL, ...)
//! - `ShortcutFlags` - Bit flags derived from the record at construction
//! - `ShortcutRecord` - An immutable, validated launch target
//! - `ShortcutError` - Why a record could not be constructed

use bitflags::bitflags;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when constructing a shortcut record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortcutError {
    #[error("shortcut name must not be empty")]
    EmptyName,
    #[error("unknown shortcut kind code '{0}'")]
    UnknownKind(char),
    #[error("target can't be empty for kind {kind} (name={name})")]
    MissingTarget { name: String, kind: ShortcutKind },
    #[error("shortcut filename must not be empty for kind {kind} (name={name})")]
    MissingShortcutFilename { name: String, kind: ShortcutKind },
}

/// What a shortcut launches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShortcutKind {
    /// Programs and scripts (.exe, .com, .cmd, .bat, .py)
    Executable,
    Folder,
    Url,
    /// Control-panel applets and management consoles
    ControlPanelItem,
    /// Everything else
    Document,
}

impl ShortcutKind {
    pub const ALL: [ShortcutKind; 5] = [
        ShortcutKind::Executable,
        ShortcutKind::Folder,
        ShortcutKind::Url,
        ShortcutKind::ControlPanelItem,
        ShortcutKind::Document,
    ];

    /// One-letter code used by shortcut collectors.
    pub fn code(&self) -> char {
        match self {
            Self::Executable => 'x',
            Self::Folder => 'f',
            Self::Url => 'u',
            Self::ControlPanelItem => 'c',
            Self::Document => 'd',
        }
    }

    pub fn from_code(code: char) -> Result<Self, ShortcutError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or(ShortcutError::UnknownKind(code))
    }

    pub fn requires_target(&self) -> bool {
        matches!(self, Self::Executable | Self::Url | Self::Document)
    }

    pub fn requires_shortcut_filename(&self) -> bool {
        !matches!(self, Self::ControlPanelItem | Self::Folder)
    }
}

impl fmt::Display for ShortcutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Executable => "executable",
            Self::Folder => "folder",
            Self::Url => "url",
            Self::ControlPanelItem => "control-panel",
            Self::Document => "document",
        };
        write!(f, "{}", name)
    }
}

bitflags! {
    /// Flags derived from a record when it is constructed.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ShortcutFlags: u32 {
        /// Built-in entry the user cannot remove.
        const CANNOT_UNLEARN = 1;
    }
}

/// A validated launch target.
///
/// Fields are private so a record can only come out of [`ShortcutRecord::new`],
/// and never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShortcutRecord {
    name: String,
    kind: ShortcutKind,
    target: Option<String>,
    shortcut_filename: Option<String>,
    flags: ShortcutFlags,
}

impl ShortcutRecord {
    /// Build a record, checking the kind-dependent requirements.
    ///
    /// Empty strings count as absent for `target` and `shortcut_filename`.
    pub fn new(
        name: impl Into<String>,
        kind: ShortcutKind,
        target: Option<String>,
        shortcut_filename: Option<String>,
    ) -> Result<Self, ShortcutError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ShortcutError::EmptyName);
        }

        let target = target.filter(|t| !t.is_empty());
        let shortcut_filename = shortcut_filename.filter(|f| !f.is_empty());

        if kind.requires_target() && target.is_none() {
            return Err(ShortcutError::MissingTarget { name, kind });
        }
        if kind.requires_shortcut_filename() && shortcut_filename.is_none() {
            return Err(ShortcutError::MissingShortcutFilename { name, kind });
        }

        let mut flags = ShortcutFlags::empty();
        if shortcut_filename.is_none() || kind == ShortcutKind::ControlPanelItem {
            flags |= ShortcutFlags::CANNOT_UNLEARN;
        }

        Ok(Self {
            name,
            kind,
            target,
            shortcut_filename,
            flags,
        })
    }

    /// Build a record from a one-letter kind code.
    pub fn from_code(
        name: impl Into<String>,
        code: char,
        target: Option<String>,
        shortcut_filename: Option<String>,
    ) -> Result<Self, ShortcutError> {
        let kind = ShortcutKind::from_code(code)?;
        Self::new(name, kind, target, shortcut_filename)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShortcutKind {
        self.kind
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn shortcut_filename(&self) -> Option<&str> {
        self.shortcut_filename.as_deref()
    }

    pub fn flags(&self) -> ShortcutFlags {
        self.flags
    }

    pub fn can_unlearn(&self) -> bool {
        !self.flags.contains(ShortcutFlags::CANNOT_UNLEARN)
    }
}
