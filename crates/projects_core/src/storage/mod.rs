//! Key/value storage seam for the mock backend.
//!
//! # Responsibility
//! - Define the mapping-like slot contract the mock store persists into.
//! - Provide in-memory and SQLite-backed implementations.
//!
//! # Invariants
//! - Values are opaque UTF-8 text; the storage never interprets them.
//! - `set_item` replaces any previous value for the key wholesale.

use crate::db::DbError;
use std::sync::Arc;
use thiserror::Error;

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure raised by a key/value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0}")]
    Db(#[from] DbError),
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("storage lock poisoned")]
    LockPoisoned,
}

/// Mapping-like persistent slot store.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key was never set.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
    /// Removes the key. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}
