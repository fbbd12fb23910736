//! Local key-value storage boundary.
//!
//! The storefront persists exactly one value (the cart snapshot) under a
//! fixed key. Hosts provide the backing store through [`KeyValueStore`]:
//!
//! - [`MemoryStore`] - in-process map, used by tests and throwaway sessions
//! - [`FileStore`] - one file per key inside a directory, used by the CLI
//!
//! Failures are reported as [`StorageError`]; callers in this crate treat
//! them as recoverable, since the in-memory cart stays correct for the
//! current session regardless.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors that can occur when reading or writing the local store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key contains characters the backing store cannot represent.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The store refused the write (quota, read-only medium, ...).
    #[error("write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },
}

/// A string-to-string persistent store, the equivalent of a browser's
/// local storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
