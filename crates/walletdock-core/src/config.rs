//! Domain constants shared by the session core and the UI.

use std::time::Duration;

// =============================================================================
// Session
// =============================================================================

/// Session storage key holding the active wallet record.
pub const SESSION_KEY: &str = "connectedWallet";

// =============================================================================
// Timing
// =============================================================================

/// Artificial delay before a demo wallet resolves.
pub const DEMO_CONNECT_DELAY: Duration = Duration::from_millis(1200);

/// Simulated transaction time for feature actions.
pub const FEATURE_ACTION_DELAY: Duration = Duration::from_millis(2000);

// =============================================================================
// Balances
// =============================================================================

/// Placeholder balances used when a balance cannot be fetched.
pub mod placeholder_balance {
    pub const EVM: &str = "0 ETH";
    pub const SOLANA: &str = "0.0 SOL";
    pub const HEDERA: &str = "0 HBAR";
}

/// Decimal places shown for fetched EVM balances.
pub const BALANCE_DECIMALS: usize = 4;

// =============================================================================
// Address Display
// =============================================================================

/// Address shortening lengths (`0x1234...5678`).
pub mod address_display {
    /// Characters kept from the start, including any `0x` prefix.
    pub const PREFIX_LEN: usize = 6;
    /// Characters kept from the end.
    pub const SUFFIX_LEN: usize = 4;
}

// =============================================================================
// Features
// =============================================================================

/// Referral link handed out by the referral feature.
pub const REFERRAL_LINK: &str = "https://edumarket.com/ref/abc123";

/// Minimum NFT count (exclusive) for the staking feature.
pub const STAKE_MIN_NFTS: u32 = 5;

/// Minimum transaction count (exclusive) for the airdrop feature.
pub const AIRDROP_MIN_TRANSACTIONS: u32 = 10;
