//! Silo Tests
//!
//! Tests verify:
//! - Silo keys are stored as `silo ++ key`
//! - Same key in different silos does not collide
//! - Silo scans return only that silo's entries, unprefixed
//! - Silo scans stop at the silo's range bound

use silokv::{LevelDb, SiloStorer, StoreError, Storer};
use tempfile::TempDir;

fn setup_temp_store() -> (TempDir, LevelDb) {
    let temp_dir = TempDir::new().unwrap();
    let store = LevelDb::open("silos", temp_dir.path()).unwrap();
    (temp_dir, store)
}

// =============================================================================
// Get / Put / Delete
// =============================================================================

#[test]
fn test_silo_put_get() {
    let (_temp, store) = setup_temp_store();

    store.put_silo_string("users", "1", "alice").unwrap();

    assert_eq!(store.get_silo_string("users", "1").unwrap(), "alice");
}

#[test]
fn test_silo_key_is_plain_concatenation() {
    let (_temp, store) = setup_temp_store();

    store.put_silo_string("users", "1", "alice").unwrap();

    assert_eq!(store.get_string("users1").unwrap(), "alice");
    assert_eq!(store.get(b"users1").unwrap(), b"alice".to_vec());
}

#[test]
fn test_same_key_in_two_silos() {
    let (_temp, store) = setup_temp_store();

    store.put_silo_string("users", "1", "alice").unwrap();
    store.put_silo_string("orders", "1", "widget").unwrap();

    assert_eq!(store.get_silo_string("users", "1").unwrap(), "alice");
    assert_eq!(store.get_silo_string("orders", "1").unwrap(), "widget");
}

#[test]
fn test_silo_get_missing() {
    let (_temp, store) = setup_temp_store();

    store.put_silo_string("users", "1", "alice").unwrap();

    assert!(matches!(store.get_silo_string("orders", "1"), Err(StoreError::NotFound)));
}

#[test]
fn test_silo_delete_only_touches_its_silo() {
    let (_temp, store) = setup_temp_store();

    store.put_silo_string("users", "1", "alice").unwrap();
    store.put_silo_string("orders", "1", "widget").unwrap();

    store.delete_silo_string("users", "1").unwrap();

    assert!(store.get_silo_string("users", "1").unwrap_err().is_not_found());
    assert_eq!(store.get_silo_string("orders", "1").unwrap(), "widget");
}

// =============================================================================
// Scan
// =============================================================================

#[test]
fn test_scan_silo_strips_prefix() {
    let (_temp, store) = setup_temp_store();

    store.put_silo_string("users", "1", "alice").unwrap();
    store.put_silo_string("users", "2", "bob").unwrap();
    store.put_silo_string("orders", "1", "widget").unwrap();
    store.put_string("unsiloed", "x").unwrap();

    let users = store.scan_silo("users").unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users["1"], "alice");
    assert_eq!(users["2"], "bob");
}

#[test]
fn test_scan_silo_empty() {
    let (_temp, store) = setup_temp_store();

    store.put_silo_string("users", "1", "alice").unwrap();

    assert!(store.scan_silo("orders").unwrap().is_empty());
}

#[test]
fn test_scan_silo_excludes_neighbouring_keys() {
    let (_temp, store) = setup_temp_store();

    // Sort immediately before and after the "user" range
    store.put_string("usea", "before").unwrap();
    store.put_string("usf", "after").unwrap();
    store.put_silo_string("user", "", "bare").unwrap();
    store.put_silo_string("user", "x", "inside").unwrap();

    let entries = store.scan_silo("user").unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[""], "bare");
    assert_eq!(entries["x"], "inside");
}

#[test]
fn test_scan_silo_after_interleaved_writes() {
    let (_temp, store) = setup_temp_store();

    for i in 0..50 {
        store.put_silo_string("a:", &i.to_string(), "a").unwrap();
        store.put_silo_string("b:", &i.to_string(), "b").unwrap();
        if i % 2 == 0 {
            store.delete_silo_string("a:", &i.to_string()).unwrap();
        }
    }

    let a = store.scan_silo("a:").unwrap();
    let b = store.scan_silo("b:").unwrap();

    assert_eq!(a.len(), 25);
    assert!(a.keys().all(|k| k.parse::<u32>().unwrap() % 2 == 1));
    assert_eq!(b.len(), 50);
    assert!(b.values().all(|v| v == "b"));
}

#[test]
fn test_scan_silo_empty_name_is_full_scan() {
    let (_temp, store) = setup_temp_store();

    store.put_string("k1", "v1").unwrap();
    store.put_silo_string("s", "k2", "v2").unwrap();

    let entries = store.scan_silo("").unwrap();

    assert_eq!(entries, store.scan().unwrap());
}

#[test]
fn test_silo_prefix_aliasing() {
    let (_temp, store) = setup_temp_store();

    // No separator: ("user", "s1") and ("users", "1") share a physical key
    store.put_silo_string("user", "s1", "first").unwrap();
    store.put_silo_string("users", "1", "second").unwrap();

    assert_eq!(store.get_silo_string("user", "s1").unwrap(), "second");

    // A silo scan covers every silo it prefixes
    let user = store.scan_silo("user").unwrap();
    assert_eq!(user["s1"], "second");
}
