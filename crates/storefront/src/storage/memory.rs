use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{KeyValueStore, StorageError};

/// In-memory key-value store.
///
/// Clones share the same underlying map, so a test can keep a handle to
/// inspect what the cart persisted after handing the store to a
/// [`CartStore`](crate::cart::CartStore).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        store
    }

    /// Current value under `key`, bypassing the trait.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.peek(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
