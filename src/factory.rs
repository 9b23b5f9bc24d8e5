//! Store factory

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::storage::{InMemoryStore, LevelDb};
use crate::storer::SiloStorer;

/// Which backend to construct
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoreConfig {
    #[default]
    InMemory,
    LevelDb(Config),
}

/// Build a fresh, independently owned store for `config`
pub fn create_storer(config: &StoreConfig) -> Result<Arc<dyn SiloStorer>> {
    match config {
        StoreConfig::InMemory => {
            debug!("initializing in-memory store");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StoreConfig::LevelDb(config) => {
            debug!(name = %config.name, "initializing leveldb store");
            Ok(Arc::new(LevelDb::open_with(config.clone())?))
        }
    }
}
