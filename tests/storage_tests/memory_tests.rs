//! InMemoryStore Tests
//!
//! The in-memory backend follows the same contract as the engine adapter.

use std::sync::Arc;
use std::thread;

use silokv::{InMemoryStore, SiloStorer, StoreError, Storer};

#[test]
fn test_new_store_is_empty() {
    let store = InMemoryStore::new();

    assert!(store.is_empty());
    assert!(store.scan().unwrap().is_empty());
}

#[test]
fn test_put_get_delete() {
    let store = InMemoryStore::new();

    store.put_string("alice", "100").unwrap();
    assert_eq!(store.get_string("alice").unwrap(), "100");
    assert_eq!(store.len(), 1);

    store.delete_string("alice").unwrap();
    assert!(matches!(store.get_string("alice"), Err(StoreError::NotFound)));
    assert!(store.is_empty());
}

#[test]
fn test_delete_absent_key_succeeds() {
    let store = InMemoryStore::new();

    store.delete_string("ghost").unwrap();
}

#[test]
fn test_scan_returns_all_entries() {
    let store = InMemoryStore::new();

    store.put_string("a", "1").unwrap();
    store.put_string("b", "2").unwrap();
    store.put_silo_string("s", "c", "3").unwrap();

    let entries = store.scan().unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries["sc"], "3");
}

#[test]
fn test_silos_are_isolated() {
    let store = InMemoryStore::new();

    store.put_silo_string("users", "1", "alice").unwrap();
    store.put_silo_string("orders", "1", "widget").unwrap();
    store.put_string("usert", "outside").unwrap();

    let users = store.scan_silo("users").unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users["1"], "alice");

    store.delete_silo_string("users", "1").unwrap();
    assert!(store.get_silo_string("users", "1").unwrap_err().is_not_found());
    assert_eq!(store.get_silo_string("orders", "1").unwrap(), "widget");
}

#[test]
fn test_scan_silo_high_codepoint_prefix() {
    let store = InMemoryStore::new();

    store.put_silo_string("\u{10FFFF}", "k", "v").unwrap();
    store.put_string("a", "b").unwrap();

    let entries = store.scan_silo("\u{10FFFF}").unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries["k"], "v");
}

#[test]
fn test_close_then_use_fails() {
    let store = InMemoryStore::new();
    store.put_string("k", "v").unwrap();

    store.close().unwrap();

    assert!(matches!(store.get_string("k"), Err(StoreError::Closed)));
    assert!(matches!(store.scan_silo("s"), Err(StoreError::Closed)));
    assert!(matches!(store.close(), Err(StoreError::Closed)));
}

#[test]
fn test_concurrent_access() {
    let store = Arc::new(InMemoryStore::new());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..50 {
                    store.put_silo_string(&format!("t{t}:"), &i.to_string(), "v").unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), 400);
    assert_eq!(store.scan_silo("t3:").unwrap().len(), 50);
}
