//! In-memory backend
//!
//! BTreeMap wrapped in RwLock. Same contract as the engine adapter, nothing
//! survives the process.

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::error::{Result, StoreError};
use crate::storer::{SiloStorer, Storer};

use super::silo::{prefix_upper_bound, silo_key, strip_silo};

/// Process-local store with the same contract as the engine adapter
pub struct InMemoryStore {
    data: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
    closed: AtomicBool,
}

impl InMemoryStore {
    /// An empty, open store
    pub fn new() -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
            closed: AtomicBool::new(false),
        }
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// True when no entries are stored
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StoreError::Closed);
        }
        Ok(())
    }

    fn get(&self, key: &[u8]) -> Result<String> {
        self.ensure_open()?;
        let value = self.data.read().get(key).cloned().ok_or(StoreError::NotFound)?;
        Ok(String::from_utf8(value)?)
    }

    fn put(&self, key: Vec<u8>, value: &str) -> Result<()> {
        self.ensure_open()?;
        self.data.write().insert(key, value.as_bytes().to_vec());
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> Result<()> {
        self.ensure_open()?;
        self.data.write().remove(key);
        Ok(())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Storer for InMemoryStore {
    fn get_string(&self, key: &str) -> Result<String> {
        self.get(key.as_bytes())
    }

    fn put_string(&self, key: &str, value: &str) -> Result<()> {
        self.put(key.as_bytes().to_vec(), value)
    }

    fn delete_string(&self, key: &str) -> Result<()> {
        self.delete(key.as_bytes())
    }

    fn scan(&self) -> Result<HashMap<String, String>> {
        self.ensure_open()?;
        let data = self.data.read();

        let mut out = HashMap::with_capacity(data.len());
        for (key, value) in data.iter() {
            out.insert(String::from_utf8(key.clone())?, String::from_utf8(value.clone())?);
        }
        Ok(out)
    }

    fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Err(StoreError::Closed);
        }
        self.data.write().clear();
        Ok(())
    }
}

impl SiloStorer for InMemoryStore {
    fn get_silo_string(&self, silo: &str, key: &str) -> Result<String> {
        self.get(&silo_key(silo, key))
    }

    fn put_silo_string(&self, silo: &str, key: &str, value: &str) -> Result<()> {
        self.put(silo_key(silo, key), value)
    }

    fn delete_silo_string(&self, silo: &str, key: &str) -> Result<()> {
        self.delete(&silo_key(silo, key))
    }

    fn scan_silo(&self, silo: &str) -> Result<HashMap<String, String>> {
        self.ensure_open()?;
        let prefix = silo.as_bytes();
        let upper = match prefix_upper_bound(prefix) {
            Some(bound) => Bound::Excluded(bound),
            None => Bound::Unbounded,
        };

        let data = self.data.read();
        let mut out = HashMap::new();
        for (key, value) in data.range::<Vec<u8>, _>((Bound::Included(prefix.to_vec()), upper)) {
            let key = strip_silo(prefix, key).unwrap_or(&key[..]);
            out.insert(String::from_utf8(key.to_vec())?, String::from_utf8(value.clone())?);
        }
        Ok(out)
    }
}
