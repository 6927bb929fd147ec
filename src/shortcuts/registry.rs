//! Shortcut registry with change tracking.
//!
//! Uses Vec for deterministic iteration order and HashMap for O(1) lookup.
//! `updated_at` records the last structural change so a poller can tell the
//! list is stale without comparing contents.
//!
//! Events that move `updated_at`:
//! 1. Construction
//! 2. `insert`, only when the key is new or the record differs
//! 3. `delete`, always (even when the key turns out to be missing)
//! 4. `merge`, always (even when empty or identical)

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tracing::debug;

use super::types::ShortcutRecord;

/// Errors from registry mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("shortcut '{0}' not found in registry")]
    KeyNotFound(String),
}

/// Ordered key -> record map that tracks when it last changed.
#[derive(Clone, Debug)]
pub struct ShortcutRegistry {
    entries: Vec<(String, ShortcutRecord)>,
    key_to_index: HashMap<String, usize>,
    updated_at: DateTime<Utc>,
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        Self::new_at(Utc::now())
    }

    pub fn new_at(now: DateTime<Utc>) -> Self {
        Self {
            entries: Vec::new(),
            key_to_index: HashMap::new(),
            updated_at: now,
        }
    }

    /// Build a registry from initial entries. Later duplicates overwrite earlier ones.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, ShortcutRecord)>,
    {
        Self::from_entries_at(entries, Utc::now())
    }

    pub fn from_entries_at<I>(entries: I, now: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = (String, ShortcutRecord)>,
    {
        let mut registry = Self::new_at(now);
        for (key, record) in entries {
            registry.write(key, record);
        }
        registry
    }

    /// Insert or overwrite `key`, returning the previous record.
    ///
    /// `updated_at` only moves when the stored value actually changes.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        record: ShortcutRecord,
    ) -> Option<ShortcutRecord> {
        self.insert_at(key, record, Utc::now())
    }

    pub fn insert_at(
        &mut self,
        key: impl Into<String>,
        record: ShortcutRecord,
        now: DateTime<Utc>,
    ) -> Option<ShortcutRecord> {
        let key = key.into();
        if self.get(&key) != Some(&record) {
            self.touch(now);
            debug!(
                event_type = "shortcut_registry",
                action = "insert",
                key = %key,
                "Shortcut inserted"
            );
        }
        self.write(key, record)
    }

    /// Remove `key`. The timestamp is touched before the lookup, so a failed
    /// delete still counts as a change.
    pub fn delete(&mut self, key: &str) -> Result<ShortcutRecord, RegistryError> {
        self.delete_at(key, Utc::now())
    }

    pub fn delete_at(
        &mut self,
        key: &str,
        now: DateTime<Utc>,
    ) -> Result<ShortcutRecord, RegistryError> {
        self.touch(now);
        let index = self
            .key_to_index
            .remove(key)
            .ok_or_else(|| RegistryError::KeyNotFound(key.to_string()))?;
        let (_, record) = self.entries.remove(index);
        for (_, i) in self.key_to_index.iter_mut() {
            if *i > index {
                *i -= 1;
            }
        }
        debug!(
            event_type = "shortcut_registry",
            action = "delete",
            key = %key,
            "Shortcut deleted"
        );
        Ok(record)
    }

    /// Overwrite or insert every entry of `other`. Always touches `updated_at`.
    pub fn merge<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (String, ShortcutRecord)>,
    {
        self.merge_at(other, Utc::now())
    }

    pub fn merge_at<I>(&mut self, other: I, now: DateTime<Utc>)
    where
        I: IntoIterator<Item = (String, ShortcutRecord)>,
    {
        self.touch(now);
        let mut merged = 0usize;
        for (key, record) in other {
            self.write(key, record);
            merged += 1;
        }
        debug!(
            event_type = "shortcut_registry",
            action = "merge",
            merged = merged,
            total = self.entries.len(),
            "Shortcuts merged"
        );
    }

    pub fn get(&self, key: &str) -> Option<&ShortcutRecord> {
        self.key_to_index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.key_to_index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &ShortcutRecord> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShortcutRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Timestamp of the most recent structural change.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// True if the registry changed after `since`.
    pub fn is_updated_since(&self, since: DateTime<Utc>) -> bool {
        self.updated_at > since
    }

    // Never moves backwards, and two touches never share a timestamp.
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::nanoseconds(1)
        };
    }

    fn write(&mut self, key: String, record: ShortcutRecord) -> Option<ShortcutRecord> {
        match self.key_to_index.get(&key) {
            Some(&index) => Some(std::mem::replace(&mut self.entries[index].1, record)),
            None => {
                self.key_to_index.insert(key.clone(), self.entries.len());
                self.entries.push((key, record));
                None
            }
        }
    }
}

impl IntoIterator for ShortcutRegistry {
    type Item = (String, ShortcutRecord);
    type IntoIter = std::vec::IntoIter<(String, ShortcutRecord)>;

    /// Consume the registry in insertion order, e.g. to merge it into another.
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
