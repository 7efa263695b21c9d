//! Mock activity counters.
//!
//! No indexer backs the NFT and transaction counts, so they come from an
//! injectable source: random in the browser, fixed in tests.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::models::WalletFamily;

/// NFT and transaction counters attached to a freshly connected wallet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Activity {
    pub nfts: Option<u32>,
    pub transactions: Option<u32>,
}

/// Supplies activity counters for live connections.
pub trait ActivitySource {
    fn activity(&self, family: WalletFamily) -> Activity;

    /// Learning token balance shown in the feature panel.
    fn edu_tokens(&self) -> u32;
}

/// Always returns the same counters.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedActivity {
    pub activity: Activity,
    pub edu_tokens: u32,
}

impl FixedActivity {
    pub fn new(nfts: Option<u32>, transactions: Option<u32>) -> Self {
        Self {
            activity: Activity { nfts, transactions },
            edu_tokens: 0,
        }
    }
}

impl ActivitySource for FixedActivity {
    fn activity(&self, _family: WalletFamily) -> Activity {
        self.activity
    }

    fn edu_tokens(&self) -> u32 {
        self.edu_tokens
    }
}

/// Random counters in per-family ranges.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomActivity;

impl RandomActivity {
    fn ranges(family: WalletFamily) -> (RangeInclusive<u32>, RangeInclusive<u32>) {
        match family {
            WalletFamily::Evm => (1..=10, 10..=109),
            WalletFamily::Solana => (1..=5, 5..=54),
            WalletFamily::Hedera => (1..=3, 5..=29),
        }
    }
}

impl ActivitySource for RandomActivity {
    fn activity(&self, family: WalletFamily) -> Activity {
        let (nfts, transactions) = Self::ranges(family);
        let mut rng = rand::thread_rng();
        Activity {
            nfts: Some(rng.gen_range(nfts)),
            transactions: Some(rng.gen_range(transactions)),
        }
    }

    fn edu_tokens(&self) -> u32 {
        rand::thread_rng().gen_range(100..=599)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_activity_stays_in_range() {
        let source = RandomActivity;
        for family in [WalletFamily::Evm, WalletFamily::Solana, WalletFamily::Hedera] {
            let (nfts, transactions) = RandomActivity::ranges(family);
            for _ in 0..50 {
                let activity = source.activity(family);
                assert!(nfts.contains(&activity.nfts.unwrap()));
                assert!(transactions.contains(&activity.transactions.unwrap()));
            }
        }
    }

    #[test]
    fn test_fixed_activity() {
        let source = FixedActivity::new(Some(6), None);
        assert_eq!(
            source.activity(WalletFamily::Hedera),
            Activity {
                nfts: Some(6),
                transactions: None
            }
        );
    }
}
