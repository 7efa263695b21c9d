//! Wallet-gated features offered by the feature panel.
//!
//! Feature actions are simulated: they wait [`FEATURE_ACTION_DELAY`] and
//! report a confirmation notice.

use log::info;
use thiserror::Error;

use crate::config::{AIRDROP_MIN_TRANSACTIONS, FEATURE_ACTION_DELAY, REFERRAL_LINK, STAKE_MIN_NFTS};
use crate::models::WalletInfo;
use crate::notify::Notice;
use crate::timer::Timer;

/// Condition a wallet must meet to use a feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// Any connected wallet
    Connected,
    /// More than this many NFTs
    NftsAbove(u32),
    /// More than this many transactions
    TransactionsAbove(u32),
}

impl Requirement {
    fn is_met(self, wallet: &WalletInfo) -> bool {
        match self {
            Self::Connected => true,
            Self::NftsAbove(min) => wallet.nfts.is_some_and(|n| n > min),
            Self::TransactionsAbove(min) => wallet.transactions.is_some_and(|n| n > min),
        }
    }
}

/// One feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Button label
    pub action: &'static str,
    pub cost: Option<&'static str>,
    pub reward: Option<&'static str>,
    pub requirement: Requirement,
    /// Confirmation notice (title, description)
    pub confirmation: (&'static str, &'static str),
}

impl Feature {
    /// Whether `wallet` unlocks this feature. Nothing is available without a wallet.
    pub fn is_available(&self, wallet: Option<&WalletInfo>) -> bool {
        wallet.is_some_and(|w| self.requirement.is_met(w))
    }
}

/// Features in display order.
pub const FEATURES: &[Feature] = &[
    Feature {
        id: "purchase",
        title: "Purchase with Crypto",
        description: "Buy courses using your cryptocurrency balance",
        action: "Buy Course",
        cost: Some("0.05 ETH"),
        reward: None,
        requirement: Requirement::Connected,
        confirmation: ("Course Purchased!", "Transaction confirmed. Course access granted."),
    },
    Feature {
        id: "earn",
        title: "Earn Learning Tokens",
        description: "Complete courses and earn EduTokens as rewards",
        action: "Start Earning",
        cost: None,
        reward: Some("+50 EDU"),
        requirement: Requirement::Connected,
        confirmation: ("Earning Started!", "You'll earn EDU tokens as you complete lessons."),
    },
    Feature {
        id: "nft",
        title: "Course Certificates NFT",
        description: "Get blockchain-verified certificates as NFTs",
        action: "Mint Certificate",
        cost: Some("Free"),
        reward: None,
        requirement: Requirement::Connected,
        confirmation: ("Certificate Minted!", "Your course certificate NFT has been created."),
    },
    Feature {
        id: "stake",
        title: "Stake for Premium",
        description: "Stake tokens to unlock premium features",
        action: "Stake Tokens",
        cost: Some("100 EDU"),
        reward: None,
        requirement: Requirement::NftsAbove(STAKE_MIN_NFTS),
        confirmation: ("Tokens Staked!", "Premium features unlocked for 30 days."),
    },
    Feature {
        id: "referral",
        title: "Referral Rewards",
        description: "Earn crypto rewards for referring friends",
        action: "Get Referral Link",
        cost: None,
        reward: Some("0.01 ETH per referral"),
        requirement: Requirement::Connected,
        confirmation: ("Referral Link Copied!", "Share this link to earn rewards."),
    },
    Feature {
        id: "airdrop",
        title: "Weekly Airdrops",
        description: "Receive free tokens for active learning",
        action: "Claim Airdrop",
        cost: None,
        reward: Some("+25 EDU"),
        requirement: Requirement::TransactionsAbove(AIRDROP_MIN_TRANSACTIONS),
        confirmation: ("Airdrop Claimed!", "25 EDU tokens added to your wallet."),
    },
];

/// Look up a feature by id.
pub fn find_feature(id: &str) -> Option<&'static Feature> {
    FEATURES.iter().find(|f| f.id == id)
}

/// Reasons a feature action cannot run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeatureError {
    #[error("Please connect your wallet to use this feature")]
    WalletRequired,
    #[error("{0} is locked for this wallet")]
    Locked(&'static str),
}

impl FeatureError {
    pub fn notice(&self) -> Notice {
        match self {
            Self::WalletRequired => Notice::error("Wallet Required", self.to_string()),
            Self::Locked(_) => Notice::error("Feature Locked", self.to_string()),
        }
    }
}

/// Result of a completed feature action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureOutcome {
    pub notice: Notice,
    /// Text the UI should place on the clipboard
    pub clipboard: Option<&'static str>,
}

/// Run a feature's simulated action for `wallet`.
pub async fn run_feature(
    feature: &Feature,
    wallet: Option<&WalletInfo>,
    timer: &dyn Timer,
) -> Result<FeatureOutcome, FeatureError> {
    let wallet = wallet.ok_or(FeatureError::WalletRequired)?;
    if !feature.is_available(Some(wallet)) {
        return Err(FeatureError::Locked(feature.title));
    }

    timer.sleep(FEATURE_ACTION_DELAY).await;
    info!("feature {} completed for {}", feature.id, wallet.provider);

    let (title, description) = feature.confirmation;
    Ok(FeatureOutcome {
        notice: Notice::success(title, description),
        clipboard: (feature.id == "referral").then_some(REFERRAL_LINK),
    })
}
