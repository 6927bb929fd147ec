//! Thread-safe handle to a [`ShortcutRegistry`].
//!
//! Mutations and the `updated_at` read go through one mutex so the timestamp
//! always agrees with the contents. Readers on other threads take a snapshot.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use super::registry::{RegistryError, ShortcutRegistry};
use super::types::ShortcutRecord;

#[derive(Clone, Debug, Default)]
pub struct SharedShortcutRegistry {
    inner: Arc<Mutex<ShortcutRegistry>>,
}

impl SharedShortcutRegistry {
    pub fn new(registry: ShortcutRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    pub fn insert(
        &self,
        key: impl Into<String>,
        record: ShortcutRecord,
    ) -> Option<ShortcutRecord> {
        self.inner.lock().insert(key, record)
    }

    pub fn delete(&self, key: &str) -> Result<ShortcutRecord, RegistryError> {
        self.inner.lock().delete(key)
    }

    pub fn merge<I>(&self, other: I)
    where
        I: IntoIterator<Item = (String, ShortcutRecord)>,
    {
        self.inner.lock().merge(other)
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.inner.lock().updated_at()
    }

    /// Clone of the current state, consistent with its own `updated_at`.
    pub fn snapshot(&self) -> ShortcutRegistry {
        self.inner.lock().clone()
    }

    /// Run `f` against the registry while holding the lock.
    ///
    /// The lock is not reentrant: calling any method of this handle (or a
    /// clone of it) from inside `f` deadlocks. Copy what you need out of `f`
    /// and act on it after `read` returns.
    pub fn read<R>(&self, f: impl FnOnce(&ShortcutRegistry) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Swap in a freshly scanned registry wholesale.
    pub fn replace(&self, registry: ShortcutRegistry) -> ShortcutRegistry {
        std::mem::replace(&mut *self.inner.lock(), registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::ShortcutKind;
    use std::thread;

    fn document(name: &str) -> ShortcutRecord {
        ShortcutRecord::new(
            name,
            ShortcutKind::Document,
            Some(format!("/home/user/{}.txt", name)),
            Some(format!("{}.desktop", name)),
        )
        .unwrap()
    }

    #[test]
    fn concurrent_inserts_are_all_visible() {
        let shared = SharedShortcutRegistry::default();
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        let key = format!("doc-{}-{}", t, i);
                        shared.insert(key.clone(), document(&key));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = shared.snapshot();
        assert_eq!(snapshot.len(), 400);
        assert_eq!(snapshot.updated_at(), shared.updated_at());
    }

    #[test]
    fn snapshot_is_detached_from_later_writes() {
        let shared = SharedShortcutRegistry::default();
        shared.insert("notes", document("notes"));
        let snapshot = shared.snapshot();

        shared.delete("notes").unwrap();

        assert!(snapshot.contains("notes"));
        assert!(!shared.read(|r| r.contains("notes")));
        assert!(shared.updated_at() > snapshot.updated_at());
    }

    #[test]
    fn read_releases_lock_before_follow_up_writes() {
        let shared = SharedShortcutRegistry::default();
        shared.insert("notes", document("notes"));

        let stale: Vec<String> = shared.read(|r| r.keys().map(str::to_string).collect());
        for key in &stale {
            shared.delete(key).unwrap();
        }

        assert!(shared.read(|r| r.is_empty()));
    }

    #[test]
    fn merge_and_replace_through_handle() {
        let shared = SharedShortcutRegistry::default();
        let before = shared.updated_at();

        shared.merge(vec![("a".to_string(), document("a"))]);
        assert!(shared.updated_at() > before);

        let old = shared.replace(ShortcutRegistry::new());
        assert_eq!(old.len(), 1);
        assert_eq!(shared.read(|r| r.len()), 0);
    }
}
