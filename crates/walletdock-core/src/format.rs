//! Formatting helpers for addresses, balances, and explorer links.

use alloy_primitives::U256;
use alloy_primitives::utils::format_ether;

use crate::config::{BALANCE_DECIMALS, address_display};
use crate::models::WalletInfo;

/// Shorten an address for display (`0x1234...5678`).
///
/// Dotted account ids (Hedera `0.0.1234`) and short strings are returned unchanged.
pub fn shorten_address(address: &str) -> String {
    let len = address.chars().count();
    if address.contains('.') || len <= address_display::PREFIX_LEN + address_display::SUFFIX_LEN {
        return address.to_string();
    }

    let prefix: String = address.chars().take(address_display::PREFIX_LEN).collect();
    let suffix: String = address
        .chars()
        .skip(len - address_display::SUFFIX_LEN)
        .collect();
    format!("{}...{}", prefix, suffix)
}

/// Convert a hex wei amount (as returned by `eth_getBalance`) to `"<ether> ETH"`.
///
/// Returns `None` when the amount is not valid hex.
pub fn format_wei_balance(raw_wei: &str) -> Option<String> {
    let digits = raw_wei.trim().trim_start_matches("0x");
    let digits = if digits.is_empty() { "0" } else { digits };
    let wei = U256::from_str_radix(digits, 16).ok()?;
    let ether: f64 = format_ether(wei).parse().ok()?;
    Some(format!("{:.*} ETH", BALANCE_DECIMALS, ether))
}

/// Block explorer URL for the wallet's address on its network.
pub fn explorer_url(info: &WalletInfo) -> String {
    match info.network.as_str() {
        "Polygon" => format!("https://polygonscan.com/address/{}", info.address),
        "Solana" => format!("https://explorer.solana.com/address/{}", info.address),
        "Hedera" => format!("https://hashscan.io/mainnet/account/{}", info.address),
        _ => format!("https://etherscan.io/address/{}", info.address),
    }
}
