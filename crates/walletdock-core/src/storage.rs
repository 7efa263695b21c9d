//! Session-scoped key-value storage.
//!
//! The browser application backs this with `sessionStorage`; tests and
//! non-browser hosts use [`MemoryStorage`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

/// Key-value storage valid for the lifetime of a browsing session.
pub trait SessionStorage {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: SessionStorage + ?Sized> SessionStorage for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory [`SessionStorage`].
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.set("k", "v1").unwrap();
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("v2"));
        assert_eq!(storage.len(), 1);

        storage.remove("k").unwrap();
        assert_eq!(storage.get("k"), None);
    }

    #[test]
    fn test_remove_missing_key() {
        let storage = MemoryStorage::new();
        assert!(storage.remove("missing").is_ok());
    }

    #[test]
    fn test_shared_handle() {
        let storage = Rc::new(MemoryStorage::new());
        let handle = Rc::clone(&storage);
        handle.set("k", "v").unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("v"));
    }
}
