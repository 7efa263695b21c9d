//! Browser wallet integrations.
//!
//! Each injected wallet gets a [`WalletBackend`](walletdock_core::WalletBackend)
//! and a presence check; [`detect_wallets`] turns them into the provider
//! registry offered by the connect menu.

mod hashpack;
mod js;
mod metamask;
mod phantom;

use std::rc::Rc;

use walletdock_core::{ActivitySource, ProviderDescriptor, ProviderRegistry, Timer, WalletFamily};

use hashpack::HashPack;
use metamask::MetaMask;
use phantom::Phantom;

/// Build the registry for this page load: installed wallets first, then demos.
pub fn detect_wallets(timer: Rc<dyn Timer>, activity: Rc<dyn ActivitySource>) -> ProviderRegistry {
    let mut registry = ProviderRegistry::new(timer, activity);

    registry.register(
        ProviderDescriptor::live(
            "MetaMask",
            "🦊",
            "Connect your MetaMask wallet for Ethereum and EVM chains",
            WalletFamily::Evm,
            Rc::new(MetaMask),
            metamask::is_available(),
        )
        .with_install_url("https://metamask.io/download/"),
    );
    registry.register(
        ProviderDescriptor::live(
            "Phantom",
            "👻",
            "Connect your Phantom wallet for Solana network",
            WalletFamily::Solana,
            Rc::new(Phantom),
            phantom::is_available(),
        )
        .with_install_url("https://phantom.app/download"),
    );
    registry.register(
        ProviderDescriptor::live(
            "HashPack",
            "🔷",
            "Connect your HashPack wallet for Hedera network",
            WalletFamily::Hedera,
            Rc::new(HashPack),
            hashpack::is_available(),
        )
        .with_install_url("https://www.hashpack.app/download"),
    );

    registry.with_demo_catalog()
}
