//! Data models for the wallet session.
//!
//! - [`WalletInfo`], [`WalletState`] - The active connection record and its state
//! - [`WalletFamily`], [`network_name`] - Chain identifier to network label mapping

mod network;
mod wallet;

pub use network::{NETWORKS, UNKNOWN_NETWORK, WalletFamily, chain_name, network_name, parse_chain_id};
pub use wallet::{WalletInfo, WalletState};
