//! Command definitions
//!
//! A storage request, its outcome, and the router that runs one against any
//! [`SiloStorer`]. Commands carrying a silo use the silo operations, the
//! rest use the plain [`Storer`](crate::Storer) ones.

use std::collections::BTreeMap;

use crate::error::{Result, StoreError};
use crate::storer::SiloStorer;

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Get a value by key
    Get { silo: Option<String>, key: String },

    /// Put a key-value pair
    Put {
        silo: Option<String>,
        key: String,
        value: String,
    },

    /// Delete a key
    Delete { silo: Option<String>, key: String },

    /// List every entry (of the silo, when given)
    Scan { silo: Option<String> },
}

/// Outcome of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Value for GET
    Value(String),

    /// GET on an absent key
    NotFound,

    /// Entries for SCAN, in key order
    Entries(BTreeMap<String, String>),

    /// PUT / DELETE succeeded
    Done,
}

/// Run `command` against `store`
///
/// An absent key on GET is reported as `Response::NotFound`; every other
/// failure is returned unchanged.
pub fn execute(store: &dyn SiloStorer, command: Command) -> Result<Response> {
    match command {
        Command::Get { silo, key } => {
            let found = match silo {
                Some(silo) => store.get_silo_string(&silo, &key),
                None => store.get_string(&key),
            };
            match found {
                Ok(value) => Ok(Response::Value(value)),
                Err(StoreError::NotFound) => Ok(Response::NotFound),
                Err(e) => Err(e),
            }
        }
        Command::Put { silo, key, value } => {
            match silo {
                Some(silo) => store.put_silo_string(&silo, &key, &value)?,
                None => store.put_string(&key, &value)?,
            }
            Ok(Response::Done)
        }
        Command::Delete { silo, key } => {
            match silo {
                Some(silo) => store.delete_silo_string(&silo, &key)?,
                None => store.delete_string(&key)?,
            }
            Ok(Response::Done)
        }
        Command::Scan { silo } => {
            let entries = match silo {
                Some(silo) => store.scan_silo(&silo)?,
                None => store.scan()?,
            };
            Ok(Response::Entries(entries.into_iter().collect()))
        }
    }
}
