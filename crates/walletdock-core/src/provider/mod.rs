//! Wallet providers and the registry that connects them.
//!
//! A provider is either a *live* wallet injected into the host environment
//! (reached through a [`WalletBackend`]) or a canned *demo* wallet from the
//! [`demo_catalog`].

mod activity;
mod demo;
mod registry;

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::ProviderFailure;
use crate::models::WalletFamily;

pub use activity::{Activity, ActivitySource, FixedActivity, RandomActivity};
pub use demo::{DemoWallet, demo_catalog};
pub use registry::ProviderRegistry;

/// Calls into an injected wallet.
///
/// Only `request_accounts` is mandatory; wallets that cannot report a chain
/// or a balance keep the default implementations.
#[async_trait(?Send)]
pub trait WalletBackend {
    /// Ask the wallet for account access. May prompt the user.
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderFailure>;

    /// Raw chain identifier (e.g. `"0x89"`).
    async fn chain_id(&self) -> Result<Option<String>, ProviderFailure> {
        Ok(None)
    }

    /// Raw balance of `account` in the chain's smallest unit, hex encoded.
    async fn balance(&self, _account: &str) -> Result<Option<String>, ProviderFailure> {
        Ok(None)
    }
}

/// A wallet injected into the host environment.
#[derive(Clone)]
pub struct LiveProvider {
    pub family: WalletFamily,
    pub backend: Rc<dyn WalletBackend>,
    /// Demo wallet used instead when the live wallet is not installed.
    pub demo_fallback: Option<DemoWallet>,
}

impl fmt::Debug for LiveProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveProvider")
            .field("family", &self.family)
            .field("demo_fallback", &self.demo_fallback)
            .finish_non_exhaustive()
    }
}

/// How a provider connects.
#[derive(Clone, Debug)]
pub enum ProviderKind {
    Live(LiveProvider),
    Demo(DemoWallet),
}

/// One offerable connection method.
#[derive(Clone, Debug)]
pub struct ProviderDescriptor {
    pub name: String,
    /// Short glyph shown next to the name
    pub icon: String,
    pub description: String,
    /// Where to get the wallet when it is not installed
    pub install_url: Option<String>,
    /// Whether the provider can be connected right now
    pub available: bool,
    pub kind: ProviderKind,
}

impl ProviderDescriptor {
    /// Describe a live wallet. `installed` is the host's presence check.
    pub fn live(
        name: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
        family: WalletFamily,
        backend: Rc<dyn WalletBackend>,
        installed: bool,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            description: description.into(),
            install_url: None,
            available: installed,
            kind: ProviderKind::Live(LiveProvider {
                family,
                backend,
                demo_fallback: None,
            }),
        }
    }

    /// Describe a demo wallet. Always available.
    pub fn demo(
        icon: impl Into<String>,
        description: impl Into<String>,
        wallet: DemoWallet,
    ) -> Self {
        Self {
            name: wallet.info.provider.clone(),
            icon: icon.into(),
            description: description.into(),
            install_url: None,
            available: true,
            kind: ProviderKind::Demo(wallet),
        }
    }

    pub fn with_install_url(mut self, url: impl Into<String>) -> Self {
        self.install_url = Some(url.into());
        self
    }

    /// Use `wallet` when the live provider is missing.
    pub fn with_demo_fallback(mut self, wallet: DemoWallet) -> Self {
        if let ProviderKind::Live(live) = &mut self.kind {
            live.demo_fallback = Some(wallet);
        }
        self
    }

    pub fn is_demo(&self) -> bool {
        matches!(self.kind, ProviderKind::Demo(_))
    }
}
