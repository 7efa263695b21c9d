//! Canned demo wallets for exercising the UI without a real wallet.

use super::ProviderDescriptor;
use crate::models::WalletInfo;

/// A statically predetermined wallet record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoWallet {
    pub info: WalletInfo,
}

impl DemoWallet {
    pub fn new(
        provider: &str,
        address: &str,
        network: &str,
        balance: &str,
        nfts: u32,
        transactions: u32,
    ) -> Self {
        Self {
            info: WalletInfo {
                address: address.to_string(),
                network: network.to_string(),
                balance: balance.to_string(),
                provider: provider.to_string(),
                nfts: Some(nfts),
                transactions: Some(transactions),
            },
        }
    }

    pub fn polygon() -> Self {
        Self::new(
            "Demo Polygon",
            "0x742d35Cc6634C0532925a3b8D4C9db96590c4C87",
            "Polygon",
            "125.50 MATIC",
            7,
            42,
        )
    }

    pub fn solana() -> Self {
        Self::new(
            "Demo Solana",
            "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU",
            "Solana",
            "12.75 SOL",
            3,
            18,
        )
    }

    pub fn hedera() -> Self {
        Self::new("Demo Hedera", "0.0.123456", "Hedera", "500 HBAR", 1, 9)
    }
}

/// Demo providers, in registration order.
pub fn demo_catalog() -> Vec<ProviderDescriptor> {
    vec![
        ProviderDescriptor::demo(
            "🧪",
            "Try the wallet features with a sample Polygon account",
            DemoWallet::polygon(),
        ),
        ProviderDescriptor::demo(
            "🧪",
            "Try the wallet features with a sample Solana account",
            DemoWallet::solana(),
        ),
        ProviderDescriptor::demo(
            "🧪",
            "Try the wallet features with a sample Hedera account",
            DemoWallet::hedera(),
        ),
    ]
}
