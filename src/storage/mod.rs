//! Storage Module
//!
//! Backends implementing the storage traits.
//!
//! ## Backends
//! - [`LevelDb`]: the embedded LSM-tree engine, one directory per named store
//! - [`InMemoryStore`]: BTreeMap-backed, for tests and throwaway runs
//!
//! Both share the silo key convention from [`silo`].

mod leveldb;
mod memory;
pub mod silo;

pub use leveldb::LevelDb;
pub use memory::InMemoryStore;
