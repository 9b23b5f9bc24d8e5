//! Configuration for SiloKV
//!
//! Centralized configuration with sensible defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::path::resolve_store_path;

/// Configuration for one named LevelDB-backed store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Location
    // -------------------------------------------------------------------------
    /// Human-readable store name, used as the directory name
    pub name: String,

    /// Parent directory of the store. A leading `~` is expanded.
    /// Internal structure:
    ///   {storage_path}/
    ///     └── {name}/          (engine files)
    pub storage_path: PathBuf,

    // -------------------------------------------------------------------------
    // Engine Options
    // -------------------------------------------------------------------------
    /// Create the store on open when it does not exist yet
    pub create_if_missing: bool,

    /// fsync the engine log on every write
    pub sync_writes: bool,

    /// Engine file handle limit (engine default when unset)
    pub max_open_files: Option<i32>,

    /// Engine memtable size in bytes (engine default when unset)
    pub write_buffer_size: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            storage_path: PathBuf::from("~/.silokv"),
            create_if_missing: true,
            sync_writes: false,
            max_open_files: None,
            write_buffer_size: None,
        }
    }
}

impl Config {
    /// Config for store `name` under `storage_path`, everything else default
    pub fn new(name: impl Into<String>, storage_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            storage_path: storage_path.into(),
            ..Self::default()
        }
    }

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject names that cannot be used as a single directory component
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(StoreError::Config("store name must not be empty".to_string()));
        }

        if self.name == "." || self.name == ".." || self.name.contains(std::path::is_separator) {
            return Err(StoreError::Config(format!(
                "store name [{}] must be a single path component",
                self.name
            )));
        }

        Ok(())
    }

    /// The full engine directory: `expand(storage_path)/name`
    pub fn resolved_path(&self) -> Result<PathBuf> {
        resolve_store_path(&self.storage_path, &self.name)
    }

    pub(crate) fn engine_options(&self) -> rocksdb::Options {
        let mut opts = rocksdb::Options::default();
        opts.create_if_missing(self.create_if_missing);

        if let Some(max_open_files) = self.max_open_files {
            opts.set_max_open_files(max_open_files);
        }
        if let Some(size) = self.write_buffer_size {
            opts.set_write_buffer_size(size);
        }

        opts
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the store name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the parent directory of the store
    pub fn storage_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config.storage_path = path.as_ref().to_path_buf();
        self
    }

    /// Create the store on open when absent
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.config.create_if_missing = create;
        self
    }

    /// fsync on every write
    pub fn sync_writes(mut self, sync: bool) -> Self {
        self.config.sync_writes = sync;
        self
    }

    /// Set the engine file handle limit
    pub fn max_open_files(mut self, count: i32) -> Self {
        self.config.max_open_files = Some(count);
        self
    }

    /// Set the engine memtable size (in bytes)
    pub fn write_buffer_size(mut self, size: usize) -> Self {
        self.config.write_buffer_size = Some(size);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
