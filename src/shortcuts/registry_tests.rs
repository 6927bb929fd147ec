use super::*;
use crate::shortcuts::ShortcutKind;
use chrono::TimeZone;

fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn url(name: &str, target: &str) -> ShortcutRecord {
    ShortcutRecord::new(
        name,
        ShortcutKind::Url,
        Some(target.to_string()),
        Some(format!("{}.url", name)),
    )
    .unwrap()
}

fn entry(key: &str, record: ShortcutRecord) -> (String, ShortcutRecord) {
    (key.to_string(), record)
}

// -------------------------------------------------------------------------
// Insert
// -------------------------------------------------------------------------

#[test]
fn insert_new_key_updates_timestamp() {
    let mut registry = ShortcutRegistry::new_at(ts(100));

    let previous = registry.insert_at("docs", url("docs", "https://docs.rs"), ts(200));

    assert!(previous.is_none());
    assert_eq!(registry.updated_at(), ts(200));
    assert!(registry.contains("docs"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn insert_identical_value_keeps_timestamp() {
    let mut registry = ShortcutRegistry::new_at(ts(100));
    registry.insert_at("docs", url("docs", "https://docs.rs"), ts(200));

    let previous = registry.insert_at("docs", url("docs", "https://docs.rs"), ts(300));

    assert_eq!(previous, Some(url("docs", "https://docs.rs")));
    assert_eq!(registry.updated_at(), ts(200));
}

#[test]
fn insert_changed_value_advances_timestamp() {
    let mut registry = ShortcutRegistry::new_at(ts(100));
    registry.insert_at("docs", url("docs", "https://docs.rs"), ts(200));

    let previous = registry.insert_at("docs", url("docs", "https://crates.io"), ts(300));

    assert_eq!(previous, Some(url("docs", "https://docs.rs")));
    assert_eq!(registry.updated_at(), ts(300));
    assert_eq!(registry.get("docs").unwrap().target(), Some("https://crates.io"));
}

#[test]
fn insert_with_wall_clock_is_strictly_later() {
    let mut registry = ShortcutRegistry::new();
    registry.insert("docs", url("docs", "https://docs.rs"));
    let first = registry.updated_at();

    registry.insert("docs", url("docs", "https://crates.io"));

    assert!(registry.updated_at() > first);
}

#[test]
fn timestamp_never_moves_backwards() {
    let mut registry = ShortcutRegistry::new_at(ts(500));

    registry.insert_at("docs", url("docs", "https://docs.rs"), ts(100));

    assert!(registry.updated_at() > ts(500));
}

// -------------------------------------------------------------------------
// Delete
// -------------------------------------------------------------------------

#[test]
fn delete_removes_key_and_advances_timestamp() {
    let mut registry = ShortcutRegistry::new_at(ts(100));
    registry.insert_at("docs", url("docs", "https://docs.rs"), ts(200));

    let removed = registry.delete_at("docs", ts(300)).unwrap();

    assert_eq!(removed.name(), "docs");
    assert!(!registry.contains("docs"));
    assert!(registry.get("docs").is_none());
    assert_eq!(registry.updated_at(), ts(300));
}

#[test]
fn delete_missing_key_is_an_error() {
    let mut registry = ShortcutRegistry::new_at(ts(100));

    let result = registry.delete_at("missing", ts(200));

    assert_eq!(result, Err(RegistryError::KeyNotFound("missing".to_string())));
    // The touch happens before the lookup.
    assert_eq!(registry.updated_at(), ts(200));
}

#[test]
fn double_delete_is_caught() {
    let mut registry = ShortcutRegistry::new_at(ts(100));
    registry.insert_at("docs", url("docs", "https://docs.rs"), ts(200));

    assert!(registry.delete_at("docs", ts(300)).is_ok());
    assert!(registry.delete_at("docs", ts(400)).is_err());
}

#[test]
fn delete_preserves_order_of_remaining_keys() {
    let mut registry = ShortcutRegistry::new_at(ts(100));
    for name in ["a", "b", "c", "d"] {
        registry.insert_at(name, url(name, "https://example.com"), ts(200));
    }

    registry.delete_at("b", ts(300)).unwrap();

    assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["a", "c", "d"]);
    assert_eq!(registry.get("c").unwrap().name(), "c");
    assert_eq!(registry.get("d").unwrap().name(), "d");
}

// -------------------------------------------------------------------------
// Merge
// -------------------------------------------------------------------------

#[test]
fn empty_merge_advances_timestamp() {
    let mut registry = ShortcutRegistry::new_at(ts(100));

    registry.merge_at(Vec::new(), ts(200));

    assert_eq!(registry.updated_at(), ts(200));
    assert!(registry.is_empty());
}

#[test]
fn identical_merge_still_advances_timestamp() {
    let mut registry = ShortcutRegistry::new_at(ts(100));
    registry.insert_at("docs", url("docs", "https://docs.rs"), ts(200));

    registry.merge_at(vec![entry("docs", url("docs", "https://docs.rs"))], ts(300));

    assert_eq!(registry.updated_at(), ts(300));
    assert_eq!(registry.len(), 1);
}

#[test]
fn merge_overwrites_in_place_and_appends_new_keys() {
    let mut registry = ShortcutRegistry::new_at(ts(100));
    registry.insert_at("a", url("a", "https://a.example"), ts(200));
    registry.insert_at("b", url("b", "https://b.example"), ts(200));

    registry.merge_at(
        vec![
            entry("c", url("c", "https://c.example")),
            entry("a", url("a", "https://a2.example")),
        ],
        ts(300),
    );

    assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(registry.get("a").unwrap().target(), Some("https://a2.example"));
}

#[test]
fn merge_accepts_another_registry() {
    let mut registry = ShortcutRegistry::new_at(ts(100));
    let rescan = ShortcutRegistry::from_entries_at(
        vec![
            entry("x", url("x", "https://x.example")),
            entry("y", url("y", "https://y.example")),
        ],
        ts(150),
    );

    registry.merge_at(rescan, ts(200));

    assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["x", "y"]);
}

// -------------------------------------------------------------------------
// Reads
// -------------------------------------------------------------------------

#[test]
fn reads_do_not_touch_timestamp() {
    let mut registry = ShortcutRegistry::new_at(ts(100));
    registry.insert_at("docs", url("docs", "https://docs.rs"), ts(200));

    let _ = registry.get("docs");
    let _ = registry.contains("missing");
    let _ = registry.len();
    let _ = registry.iter().count();
    let _ = registry.values().count();
    let _ = registry.keys().count();

    assert_eq!(registry.updated_at(), ts(200));
}

#[test]
fn from_entries_sets_construction_time() {
    let registry = ShortcutRegistry::from_entries_at(
        vec![
            entry("a", url("a", "https://a.example")),
            entry("b", url("b", "https://b.example")),
            entry("a", url("a", "https://a2.example")),
        ],
        ts(42),
    );

    assert_eq!(registry.updated_at(), ts(42));
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get("a").unwrap().target(), Some("https://a2.example"));
}

#[test]
fn is_updated_since_compares_against_last_change() {
    let mut registry = ShortcutRegistry::new_at(ts(100));
    assert!(!registry.is_updated_since(ts(100)));

    registry.insert_at("docs", url("docs", "https://docs.rs"), ts(200));

    assert!(registry.is_updated_since(ts(100)));
    assert!(!registry.is_updated_since(ts(200)));
}

// -------------------------------------------------------------------------
// Rescan lifecycle
// -------------------------------------------------------------------------

#[test]
fn insert_identical_then_delete_scenario() {
    let (t0, t1, t2, t3) = (ts(1_000), ts(1_001), ts(1_002), ts(1_003));
    let mut registry = ShortcutRegistry::new_at(t0);
    assert_eq!(registry.updated_at(), t0);

    let a = url("a", "https://a.example");
    registry.insert_at("a", a.clone(), t1);
    assert_eq!(registry.updated_at(), t1);

    registry.insert_at("a", a, t2);
    assert_eq!(registry.updated_at(), t1);

    registry.delete_at("a", t3).unwrap();
    assert_eq!(registry.updated_at(), t3);
    assert!(registry.is_empty());
}
