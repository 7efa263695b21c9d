//! Wallet session core.
//!
//! Platform-independent logic behind the wallet widgets:
//! - [`SessionStore`] - The single active wallet record, persisted to session storage
//! - [`ProviderRegistry`] - Live and demo connection methods
//! - [`WalletController`] - Connect/disconnect flows reported through a [`Notifier`]
//! - [`features`] - Wallet-gated feature actions
//!
//! Host capabilities ([`SessionStorage`], [`WalletBackend`], [`Timer`],
//! [`Notifier`], [`ActivitySource`]) are injected so the core runs natively in
//! tests and in the browser alike.

pub mod config;
mod controller;
pub mod error;
pub mod features;
pub mod format;
pub mod models;
pub mod notify;
pub mod provider;
mod session;
pub mod storage;
pub mod timer;

pub use controller::{WalletController, failure_notice};
pub use error::{ConnectError, ProviderFailure, SessionError, StorageError};
pub use models::{WalletFamily, WalletInfo, WalletState};
pub use notify::{Notice, Notifier, Severity};
pub use provider::{
    ActivitySource, DemoWallet, ProviderDescriptor, ProviderKind, ProviderRegistry, WalletBackend,
};
pub use session::SessionStore;
pub use storage::{MemoryStorage, SessionStorage};
pub use timer::Timer;
