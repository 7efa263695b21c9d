//! Single-session wallet store.
//!
//! [`SessionStore`] is the single source of truth for "is a wallet connected,
//! and with what data". Every mutation writes through to the injected
//! [`SessionStorage`], so the persisted record never drifts from memory.
//!
//! ```text
//!                commit                    commit (replace)
//! Disconnected ---------> Connected ----------------------+
//!      ^                      |  ^                         |
//!      +------- clear --------+  +-------------------------+
//! ```

use log::{debug, info, warn};

use crate::config::SESSION_KEY;
use crate::error::SessionError;
use crate::models::{WalletInfo, WalletState};
use crate::storage::SessionStorage;

/// Owns the active wallet record and its persisted copy.
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    key: String,
    active: Option<WalletInfo>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Create a disconnected store persisting under [`SESSION_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, SESSION_KEY)
    }

    /// Create a disconnected store persisting under a custom key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            active: None,
        }
    }

    /// Load the persisted record, if any. Returns whether a wallet is connected.
    ///
    /// A record that fails to parse or validate is removed from storage and the
    /// store stays disconnected. Never fails.
    pub fn restore(&mut self) -> bool {
        self.active = None;

        let Some(raw) = self.storage.get(&self.key) else {
            debug!("no persisted wallet session");
            return false;
        };

        match WalletInfo::from_json(&raw) {
            Ok(info) => {
                info!("restored {} session on {}", info.provider, info.network);
                self.active = Some(info);
                true
            }
            Err(e) => {
                warn!("discarding persisted wallet session: {}", e);
                if let Err(e) = self.storage.remove(&self.key) {
                    warn!("failed to remove malformed session: {}", e);
                }
                false
            }
        }
    }

    /// Make `info` the active record and persist it, replacing any previous one.
    ///
    /// Invalid records are rejected and leave the store untouched.
    pub fn commit(&mut self, info: WalletInfo) -> Result<(), SessionError> {
        info.validate()?;

        if let Err(e) = self.storage.set(&self.key, &info.to_json()) {
            warn!("failed to persist wallet session: {}", e);
        }
        debug!("committed {} session", info.provider);
        self.active = Some(info);
        Ok(())
    }

    /// Drop the active record and its persisted copy. Idempotent.
    pub fn clear(&mut self) {
        if self.active.take().is_some() {
            debug!("cleared wallet session");
        }
        if let Err(e) = self.storage.remove(&self.key) {
            warn!("failed to remove wallet session: {}", e);
        }
    }

    /// The active record, if any.
    pub fn current(&self) -> Option<&WalletInfo> {
        self.active.as_ref()
    }

    /// Check if a wallet is connected
    pub fn is_connected(&self) -> bool {
        self.active.is_some()
    }

    /// Snapshot of the store as a [`WalletState`].
    pub fn state(&self) -> WalletState {
        self.active.clone().into()
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::error::StorageError;
    use crate::storage::MemoryStorage;

    fn wallet(address: &str) -> WalletInfo {
        WalletInfo {
            address: address.to_string(),
            network: "Ethereum Mainnet".to_string(),
            balance: "0.5000 ETH".to_string(),
            provider: "MetaMask".to_string(),
            nfts: Some(2),
            transactions: Some(40),
        }
    }

    /// Storage that accepts reads but fails every write.
    struct ReadOnlyStorage(MemoryStorage);

    impl SessionStorage for ReadOnlyStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&self, _: &str, _: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed)
        }

        fn remove(&self, _: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed)
        }
    }

    #[test]
    fn test_new_store_is_disconnected() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(!store.is_connected());
        assert_eq!(store.current(), None);
        assert_eq!(store.state(), WalletState::Disconnected);
    }

    #[test]
    fn test_commit_then_current() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.commit(wallet("0xaaa")).unwrap();

        assert!(store.is_connected());
        assert_eq!(store.current(), Some(&wallet("0xaaa")));
        assert_eq!(
            store.storage().get(SESSION_KEY),
            Some(wallet("0xaaa").to_json())
        );
    }

    #[test]
    fn test_commit_replaces_previous_record() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.commit(wallet("0xaaa")).unwrap();

        let mut next = wallet("0xbbb");
        next.nfts = None;
        store.commit(next.clone()).unwrap();

        assert_eq!(store.current(), Some(&next));
        let persisted = WalletInfo::from_json(&store.storage().get(SESSION_KEY).unwrap()).unwrap();
        assert_eq!(persisted, next);
    }

    #[test]
    fn test_commit_rejects_empty_address() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.commit(wallet("0xaaa")).unwrap();

        assert_eq!(store.commit(wallet("")), Err(SessionError::EmptyAddress));
        assert_eq!(store.current(), Some(&wallet("0xaaa")));
    }

    #[test]
    fn test_clear() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.commit(wallet("0xaaa")).unwrap();
        store.clear();

        assert!(!store.is_connected());
        assert_eq!(store.storage().get(SESSION_KEY), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.clear();
        store.clear();
        assert_eq!(store.state(), WalletState::Disconnected);
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_restore_well_formed_record() {
        let storage = Rc::new(MemoryStorage::new());
        let mut first = SessionStore::new(Rc::clone(&storage));
        first.commit(wallet("0xaaa")).unwrap();

        let mut second = SessionStore::new(Rc::clone(&storage));
        assert!(second.restore());
        assert_eq!(second.current(), Some(&wallet("0xaaa")));
    }

    #[test]
    fn test_restore_missing_record() {
        let mut store = SessionStore::new(MemoryStorage::new());
        assert!(!store.restore());
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_restore_malformed_record_is_discarded() {
        let storage = MemoryStorage::new();
        storage.set(SESSION_KEY, "{\"address\":").unwrap();

        let mut store = SessionStore::new(storage);
        assert!(!store.restore());
        assert_eq!(store.current(), None);
        assert_eq!(store.storage().get(SESSION_KEY), None);
    }

    #[test]
    fn test_restore_record_with_empty_address_is_discarded() {
        let storage = MemoryStorage::new();
        storage
            .set(
                SESSION_KEY,
                r#"{"address":"","network":"Solana","balance":"0.0 SOL","provider":"Phantom"}"#,
            )
            .unwrap();

        let mut store = SessionStore::new(storage);
        assert!(!store.restore());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_custom_key() {
        let mut store = SessionStore::with_key(MemoryStorage::new(), "other");
        store.commit(wallet("0xaaa")).unwrap();
        assert!(store.storage().get("other").is_some());
        assert_eq!(store.storage().get(SESSION_KEY), None);
    }

    #[test]
    fn test_write_failures_are_swallowed() {
        let mut store = SessionStore::new(ReadOnlyStorage(MemoryStorage::new()));
        store.commit(wallet("0xaaa")).unwrap();
        assert!(store.is_connected());

        store.clear();
        assert!(!store.is_connected());
    }
}
