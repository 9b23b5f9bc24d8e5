//! Storage capability traits
//!
//! Higher-level components consume storage only through [`Storer`], so any
//! backend (engine-backed, in-memory, or a generated mock) can stand in.
//! [`SiloStorer`] adds the silo namespace operations on top.

use std::collections::HashMap;

use mockall::{automock, mock};

use crate::error::Result;

/// The storage capability set
#[automock]
pub trait Storer: Send + Sync {
    /// Value stored under `key`, or `StoreError::NotFound`
    fn get_string(&self, key: &str) -> Result<String>;

    /// Insert or overwrite `key`
    fn put_string(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key succeeds.
    fn delete_string(&self, key: &str) -> Result<()>;

    /// Every live entry in the store, fully materialized
    fn scan(&self) -> Result<HashMap<String, String>>;

    /// Release the underlying resource. Later calls fail with `StoreError::Closed`.
    fn close(&self) -> Result<()>;
}

/// Silo namespaces layered over a [`Storer`]
///
/// A key `k` in silo `s` is stored as the plain concatenation `s + k`, with
/// no separator. Silo names must be chosen so that two different
/// (silo, key) pairs can never concatenate to the same bytes.
pub trait SiloStorer: Storer {
    fn get_silo_string(&self, silo: &str, key: &str) -> Result<String>;

    fn put_silo_string(&self, silo: &str, key: &str, value: &str) -> Result<()>;

    fn delete_silo_string(&self, silo: &str, key: &str) -> Result<()>;

    /// Entries of `silo` only, keyed without the silo prefix
    fn scan_silo(&self, silo: &str) -> Result<HashMap<String, String>>;
}

mock! {
    pub SiloStore {}

    impl Storer for SiloStore {
        fn get_string(&self, key: &str) -> Result<String>;
        fn put_string(&self, key: &str, value: &str) -> Result<()>;
        fn delete_string(&self, key: &str) -> Result<()>;
        fn scan(&self) -> Result<HashMap<String, String>>;
        fn close(&self) -> Result<()>;
    }

    impl SiloStorer for SiloStore {
        fn get_silo_string(&self, silo: &str, key: &str) -> Result<String>;
        fn put_silo_string(&self, silo: &str, key: &str, value: &str) -> Result<()>;
        fn delete_silo_string(&self, silo: &str, key: &str) -> Result<()>;
        fn scan_silo(&self, silo: &str) -> Result<HashMap<String, String>>;
    }
}
