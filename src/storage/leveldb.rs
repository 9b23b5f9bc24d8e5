//! LevelDB adapter
//!
//! [`Storer`] and [`SiloStorer`] backed by the embedded RocksDB engine.
//!
//! ## Responsibilities
//! - Open (or create) the engine directory at `expand(storage_path)/name`
//! - Classify open failures as corruption or plain open failure
//! - Translate string keys/values to engine bytes and back
//! - Bound silo scans to the silo's key range
//!
//! Everything else (durability, compaction, iterator consistency, file
//! locking) is the engine's job.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use rocksdb::{Direction, ErrorKind, IteratorMode, ReadOptions, WriteOptions, DB};

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::storer::{SiloStorer, Storer};

use super::silo::{prefix_upper_bound, silo_key, strip_silo};

/// A named store and its engine handle
///
/// ## Concurrency:
/// - Engine calls run under the read side of `db`; the engine handles
///   concurrent readers and writers itself
/// - `close` takes the write side, waits for in-flight calls, and drops the
///   engine. Later calls see `None` and fail with `StoreError::Closed`.
pub struct LevelDb {
    /// Human-readable store name
    name: String,

    /// Resolved engine directory
    path: PathBuf,

    /// fsync on every write
    sync_writes: bool,

    db: RwLock<Option<DB>>,
}

impl LevelDb {
    /// Open or create the store `name` under `storage_path`
    pub fn open(name: &str, storage_path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(Config::new(name, storage_path.as_ref()))
    }

    /// Open or create a store described by `config`
    pub fn open_with(config: Config) -> Result<Self> {
        config.validate()?;
        let path = config.resolved_path()?;

        if config.create_if_missing {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| StoreError::OpenFailed {
                    path: path.clone(),
                    source: Box::new(e),
                })?;
            }
        }

        let db = DB::open(&config.engine_options(), &path).map_err(|source| {
            if source.kind() == ErrorKind::Corruption {
                StoreError::CorruptedStore {
                    path: path.clone(),
                    source,
                }
            } else {
                StoreError::OpenFailed {
                    path: path.clone(),
                    source: Box::new(source),
                }
            }
        })?;

        tracing::debug!(name = %config.name, path = %path.display(), "opened store");

        Ok(Self {
            name: config.name,
            path,
            sync_writes: config.sync_writes,
            db: RwLock::new(Some(db)),
        })
    }

    // =========================================================================
    // Byte Primitives
    // =========================================================================

    /// Value stored under `key`, or `StoreError::NotFound`
    pub fn get(&self, key: &[u8]) -> Result<Vec<u8>> {
        self.with_db(|db| db.get(key)?.ok_or(StoreError::NotFound))
    }

    /// Insert or overwrite `key`
    pub fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.with_db(|db| Ok(db.put_opt(key, value, &self.write_options())?))
    }

    /// Remove `key`; absent keys are a no-op
    pub fn delete(&self, key: &[u8]) -> Result<()> {
        self.with_db(|db| Ok(db.delete_opt(key, &self.write_options())?))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The store name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved engine directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True until `close` has been called
    pub fn is_open(&self) -> bool {
        self.db.read().is_some()
    }

    fn with_db<T>(&self, f: impl FnOnce(&DB) -> Result<T>) -> Result<T> {
        let guard = self.db.read();
        let db = guard.as_ref().ok_or(StoreError::Closed)?;
        f(db)
    }

    fn write_options(&self) -> WriteOptions {
        let mut opts = WriteOptions::default();
        opts.set_sync(self.sync_writes);
        opts
    }

    fn collect_strings(
        entries: impl Iterator<Item = std::result::Result<(Box<[u8]>, Box<[u8]>), rocksdb::Error>>,
        strip: &[u8],
    ) -> Result<HashMap<String, String>> {
        let mut out = HashMap::new();
        for entry in entries {
            let (key, value) = entry?;
            // The bounded iterator only yields keys carrying the prefix
            let key = strip_silo(strip, &key).unwrap_or(&key[..]);
            out.insert(String::from_utf8(key.to_vec())?, String::from_utf8(value.into_vec())?);
        }
        Ok(out)
    }
}

impl Storer for LevelDb {
    fn get_string(&self, key: &str) -> Result<String> {
        Ok(String::from_utf8(self.get(key.as_bytes())?)?)
    }

    fn put_string(&self, key: &str, value: &str) -> Result<()> {
        self.put(key.as_bytes(), value.as_bytes())
    }

    fn delete_string(&self, key: &str) -> Result<()> {
        self.delete(key.as_bytes())
    }

    fn scan(&self) -> Result<HashMap<String, String>> {
        self.with_db(|db| Self::collect_strings(db.iterator(IteratorMode::Start), &[]))
    }

    fn close(&self) -> Result<()> {
        let db = self.db.write().take().ok_or(StoreError::Closed)?;
        let flushed = db.flush();
        drop(db);

        tracing::debug!(name = %self.name, path = %self.path.display(), "closed store");
        Ok(flushed?)
    }
}

impl SiloStorer for LevelDb {
    fn get_silo_string(&self, silo: &str, key: &str) -> Result<String> {
        Ok(String::from_utf8(self.get(&silo_key(silo, key))?)?)
    }

    fn put_silo_string(&self, silo: &str, key: &str, value: &str) -> Result<()> {
        self.put(&silo_key(silo, key), value.as_bytes())
    }

    fn delete_silo_string(&self, silo: &str, key: &str) -> Result<()> {
        self.delete(&silo_key(silo, key))
    }

    fn scan_silo(&self, silo: &str) -> Result<HashMap<String, String>> {
        let prefix = silo.as_bytes();

        let mut read_opts = ReadOptions::default();
        read_opts.set_iterate_lower_bound(prefix.to_vec());
        if let Some(upper) = prefix_upper_bound(prefix) {
            read_opts.set_iterate_upper_bound(upper);
        }

        self.with_db(|db| {
            let mode = IteratorMode::From(prefix, Direction::Forward);
            Self::collect_strings(db.iterator_opt(mode, read_opts), prefix)
        })
    }
}

impl std::fmt::Debug for LevelDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelDb")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("open", &self.is_open())
            .finish()
    }
}
