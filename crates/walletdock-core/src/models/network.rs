//! Network labels and wallet families.

use crate::config::placeholder_balance;

/// Label used when a chain identifier is not in [`NETWORKS`].
pub const UNKNOWN_NETWORK: &str = "Unknown Network";

/// Known EVM chain identifiers and their display names, in lookup order.
pub const NETWORKS: &[(u64, &str)] = &[
    (0x1, "Ethereum Mainnet"),
    (0x89, "Polygon"),
    (0xa, "Optimism"),
    (0xa4b1, "Arbitrum"),
    (0x2105, "Base"),
    (0x38, "BNB Chain"),
    (0xa86a, "Avalanche"),
    (0xaa36a7, "Sepolia"),
];

/// Parse an EIP-155 chain identifier as reported by `eth_chainId` ("0x89").
///
/// Plain decimal strings are accepted as well.
pub fn parse_chain_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => raw.parse().ok(),
    }
}

/// Convert a numeric chain ID to a network name.
pub fn chain_name(chain_id: u64) -> &'static str {
    NETWORKS
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_NETWORK)
}

/// Map a raw chain identifier to a network name.
///
/// Unreadable or unmapped identifiers yield [`UNKNOWN_NETWORK`].
pub fn network_name(raw_chain_id: &str) -> &'static str {
    parse_chain_id(raw_chain_id).map_or(UNKNOWN_NETWORK, chain_name)
}

/// Wallet ecosystem a live provider belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalletFamily {
    /// EIP-1193 wallets (MetaMask); network comes from the chain ID
    Evm,
    /// Solana wallets (Phantom)
    Solana,
    /// Hedera wallets (HashPack)
    Hedera,
}

impl WalletFamily {
    /// Network label for families bound to a single network.
    pub fn fixed_network(self) -> Option<&'static str> {
        match self {
            Self::Evm => None,
            Self::Solana => Some("Solana"),
            Self::Hedera => Some("Hedera"),
        }
    }

    /// Balance shown when no balance could be fetched.
    pub fn placeholder_balance(self) -> &'static str {
        match self {
            Self::Evm => placeholder_balance::EVM,
            Self::Solana => placeholder_balance::SOLANA,
            Self::Hedera => placeholder_balance::HEDERA,
        }
    }
}
