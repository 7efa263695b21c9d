//! sessionStorage backend for the wallet session.
//!
//! Entries live for the current browser session only: closing the tab or
//! window clears them, so a reconnect is needed on new visits.

use walletdock_core::{SessionStorage, StorageError};

use super::dom;

/// [`SessionStorage`] backed by `window.sessionStorage`.
///
/// Looks the storage object up on every call, so the handle itself is a
/// plain value that can live inside reactive state.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

impl SessionStorage for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = dom::session_storage()?;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::session_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = dom::session_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StorageError::WriteFailed)
    }
}
