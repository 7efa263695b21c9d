//! UI components built with Leptos.
//!
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`toast`] - Toast notifications fed by the wallet controller
//! - [`wallet_connect`] - Header wallet menu (connect, account details)
//! - [`wallet_features`] - Wallet profile and gated feature cards

pub mod icons;
pub mod toast;
pub mod wallet_connect;
pub mod wallet_features;

pub use toast::{ToastNotifier, ToastQueue, Toaster};
pub use wallet_connect::WalletConnect;
pub use wallet_features::WalletFeatures;
