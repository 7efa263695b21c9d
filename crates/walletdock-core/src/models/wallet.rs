use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::format::shorten_address;

/// Canonical record describing one connected account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletInfo {
    /// Account identifier (hex, base58 or dotted account id)
    pub address: String,
    /// Network label from the network table
    pub network: String,
    /// Display balance, e.g. `1.2500 ETH`
    pub balance: String,
    /// Name of the connection method used
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nfts: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<u32>,
}

impl WalletInfo {
    /// Check structural invariants of the record.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.address.trim().is_empty() {
            return Err(SessionError::EmptyAddress);
        }
        Ok(())
    }

    /// Parse and validate a persisted record.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        let info: Self =
            serde_json::from_str(json).map_err(|e| SessionError::Malformed(e.to_string()))?;
        info.validate()?;
        Ok(info)
    }

    /// Serialize for persistence.
    pub fn to_json(&self) -> String {
        // A struct of strings and integers always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Wallet connection state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WalletState {
    #[default]
    Disconnected,
    Connected(WalletInfo),
}

impl WalletState {
    /// Check if wallet is connected
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected(_))
    }

    /// Get the active record if connected
    pub fn info(&self) -> Option<&WalletInfo> {
        match self {
            WalletState::Connected(info) => Some(info),
            WalletState::Disconnected => None,
        }
    }

    /// Format address for display (0x1234...5678, or "guest")
    pub fn display_name(&self) -> String {
        match self {
            WalletState::Connected(info) => shorten_address(&info.address),
            WalletState::Disconnected => "guest".to_string(),
        }
    }
}

impl From<Option<WalletInfo>> for WalletState {
    fn from(info: Option<WalletInfo>) -> Self {
        info.map_or(WalletState::Disconnected, WalletState::Connected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WalletInfo {
        WalletInfo {
            address: "0x1234567890123456789012345678901234567890".to_string(),
            network: "Polygon".to_string(),
            balance: "1.0000 ETH".to_string(),
            provider: "MetaMask".to_string(),
            nfts: Some(3),
            transactions: None,
        }
    }

    #[test]
    fn test_disconnected_state() {
        let state = WalletState::Disconnected;
        assert!(!state.is_connected());
        assert_eq!(state.info(), None);
        assert_eq!(state.display_name(), "guest");
    }

    #[test]
    fn test_connected_state() {
        let state = WalletState::Connected(sample());
        assert!(state.is_connected());
        assert_eq!(state.info().map(|i| i.network.as_str()), Some("Polygon"));
        assert_eq!(state.display_name(), "0x1234...7890");
    }

    #[test]
    fn test_default() {
        assert_eq!(WalletState::default(), WalletState::Disconnected);
    }

    #[test]
    fn test_json_uses_camel_case_and_omits_absent_counters() {
        let json = sample().to_json();
        assert!(json.contains("\"address\""));
        assert!(json.contains("\"nfts\":3"));
        assert!(!json.contains("transactions"));
    }

    #[test]
    fn test_from_json_accepts_missing_counters() {
        let json = r#"{"address":"0.0.42","network":"Hedera","balance":"0 HBAR","provider":"HashPack"}"#;
        let info = WalletInfo::from_json(json).unwrap();
        assert_eq!(info.address, "0.0.42");
        assert_eq!(info.nfts, None);
        assert_eq!(info.transactions, None);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            WalletInfo::from_json("{not json"),
            Err(SessionError::Malformed(_))
        ));
        assert!(matches!(
            WalletInfo::from_json(r#"{"address":"0xabc"}"#),
            Err(SessionError::Malformed(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_empty_address() {
        let json = r#"{"address":" ","network":"Solana","balance":"0.0 SOL","provider":"Phantom"}"#;
        assert_eq!(WalletInfo::from_json(json), Err(SessionError::EmptyAddress));
    }

    #[test]
    fn test_from_json_rejects_negative_counter() {
        let json = r#"{"address":"abc","network":"Solana","balance":"0.0 SOL","provider":"Phantom","nfts":-1}"#;
        assert!(matches!(
            WalletInfo::from_json(json),
            Err(SessionError::Malformed(_))
        ));
    }
}
