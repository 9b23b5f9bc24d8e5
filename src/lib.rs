//! # SiloKV
//!
//! A small key-value storage layer over an embedded LSM-tree engine:
//! - One engine directory per named store, at `expand(storage_path)/name`
//! - String get/put/delete/scan behind the mockable [`Storer`] trait
//! - Silo namespaces via key prefixing, with range-bounded silo scans
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Callers / CLI (Command router)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  Storer / SiloStorer
//!          ┌────────────┼─────────────────────┐
//!          │            │                     │
//!          ▼            ▼                     ▼
//!   ┌─────────────┐ ┌─────────────┐   ┌─────────────┐
//!   │   LevelDb   │ │  InMemory   │   │ MockStorer  │
//!   │  (adapter)  │ │ (BTreeMap)  │   │  (mockall)  │
//!   └──────┬──────┘ └─────────────┘   └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │   RocksDB   │
//!   │  (engine)   │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod path;

pub mod storer;
pub mod storage;
pub mod factory;
pub mod command;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StoreError, Result};
pub use config::Config;
pub use storer::{MockSiloStore, MockStorer, SiloStorer, Storer};
pub use storage::{InMemoryStore, LevelDb};
pub use factory::{create_storer, StoreConfig};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of SiloKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
