//! Provider registry: lists connection methods and runs connect attempts.

use std::rc::Rc;

use log::{debug, info, warn};

use super::{ActivitySource, DemoWallet, LiveProvider, ProviderDescriptor, ProviderKind, demo_catalog};
use crate::config::DEMO_CONNECT_DELAY;
use crate::error::{ConnectError, ProviderFailure};
use crate::format::format_wei_balance;
use crate::models::{UNKNOWN_NETWORK, WalletFamily, WalletInfo, network_name};
use crate::timer::Timer;

/// Ordered set of connection methods.
///
/// Order is registration order and never depends on availability.
pub struct ProviderRegistry {
    providers: Vec<ProviderDescriptor>,
    timer: Rc<dyn Timer>,
    activity: Rc<dyn ActivitySource>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new(timer: Rc<dyn Timer>, activity: Rc<dyn ActivitySource>) -> Self {
        Self {
            providers: Vec::new(),
            timer,
            activity,
        }
    }

    /// Append a provider.
    pub fn register(&mut self, descriptor: ProviderDescriptor) {
        debug!(
            "registered provider {} (available: {})",
            descriptor.name, descriptor.available
        );
        self.providers.push(descriptor);
    }

    /// Append the demo catalog after the providers registered so far.
    pub fn with_demo_catalog(mut self) -> Self {
        for descriptor in demo_catalog() {
            self.register(descriptor);
        }
        self
    }

    /// All providers in registration order.
    pub fn list_providers(&self) -> &[ProviderDescriptor] {
        &self.providers
    }

    /// Look up a provider by name.
    pub fn find(&self, name: &str) -> Option<&ProviderDescriptor> {
        self.providers.iter().find(|p| p.name == name)
    }

    /// Source of the mock activity counters.
    pub fn activity(&self) -> &dyn ActivitySource {
        self.activity.as_ref()
    }

    /// Run the descriptor's connect capability.
    pub async fn connect(&self, descriptor: &ProviderDescriptor) -> Result<WalletInfo, ConnectError> {
        match &descriptor.kind {
            ProviderKind::Demo(wallet) => Ok(self.connect_demo(wallet).await),
            ProviderKind::Live(live) if descriptor.available => {
                self.connect_live(&descriptor.name, live).await
            }
            ProviderKind::Live(LiveProvider {
                demo_fallback: Some(wallet),
                ..
            }) => {
                info!("{} not installed, using demo wallet", descriptor.name);
                Ok(self.connect_demo(wallet).await)
            }
            ProviderKind::Live(_) => Err(ConnectError::ProviderUnavailable {
                provider: descriptor.name.clone(),
                install_url: descriptor.install_url.clone(),
            }),
        }
    }

    async fn connect_demo(&self, wallet: &DemoWallet) -> WalletInfo {
        self.timer.sleep(DEMO_CONNECT_DELAY).await;
        wallet.info.clone()
    }

    async fn connect_live(&self, name: &str, live: &LiveProvider) -> Result<WalletInfo, ConnectError> {
        let accounts = live
            .backend
            .request_accounts()
            .await
            .map_err(|failure| connect_error(name, failure))?;

        let address = accounts
            .into_iter()
            .map(|a| a.trim().to_string())
            .find(|a| !a.is_empty())
            .ok_or_else(|| ConnectError::ProviderError("No accounts found".to_string()))?;

        let network = match live.family.fixed_network() {
            Some(network) => network.to_string(),
            None => self.resolve_network(name, live).await,
        };
        let balance = self.fetch_balance(name, live, &address).await;
        let activity = self.activity.activity(live.family);

        info!("connected {} on {}", name, network);
        Ok(WalletInfo {
            address,
            network,
            balance,
            provider: name.to_string(),
            nfts: activity.nfts,
            transactions: activity.transactions,
        })
    }

    async fn resolve_network(&self, name: &str, live: &LiveProvider) -> String {
        match live.backend.chain_id().await {
            Ok(Some(raw)) => network_name(&raw).to_string(),
            Ok(None) => UNKNOWN_NETWORK.to_string(),
            Err(e) => {
                warn!("{}: could not read chain id: {}", name, e);
                UNKNOWN_NETWORK.to_string()
            }
        }
    }

    /// Best-effort balance lookup. Any failure yields the family placeholder.
    async fn fetch_balance(&self, name: &str, live: &LiveProvider, address: &str) -> String {
        let placeholder = live.family.placeholder_balance().to_string();
        let raw = match live.backend.balance(address).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return placeholder,
            Err(e) => {
                warn!("{}: could not fetch balance: {}", name, e);
                return placeholder;
            }
        };

        let formatted = match live.family {
            WalletFamily::Evm => format_wei_balance(&raw),
            WalletFamily::Solana | WalletFamily::Hedera => None,
        };
        formatted.unwrap_or_else(|| {
            warn!("{}: unreadable balance {:?}", name, raw);
            placeholder
        })
    }
}

fn connect_error(name: &str, failure: ProviderFailure) -> ConnectError {
    match failure {
        ProviderFailure::Rejected => ConnectError::UserRejected,
        ProviderFailure::Failed(Some(message)) => ConnectError::ProviderError(message),
        ProviderFailure::Failed(None) => {
            ConnectError::ProviderError(format!("Failed to connect to {}", name))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::models::NETWORKS;
    use crate::provider::{FixedActivity, WalletBackend};

    /// Backend answering with preset results.
    struct ScriptedBackend {
        accounts: Result<Vec<String>, ProviderFailure>,
        chain_id: Result<Option<String>, ProviderFailure>,
        balance: Result<Option<String>, ProviderFailure>,
        calls: Cell<usize>,
    }

    impl ScriptedBackend {
        fn evm(chain_id: &str) -> Self {
            Self {
                accounts: Ok(vec!["0xabcdef0123456789abcdef0123456789abcdef01".to_string()]),
                chain_id: Ok(Some(chain_id.to_string())),
                balance: Ok(Some("0xde0b6b3a7640000".to_string())),
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl WalletBackend for ScriptedBackend {
        async fn request_accounts(&self) -> Result<Vec<String>, ProviderFailure> {
            self.calls.set(self.calls.get() + 1);
            self.accounts.clone()
        }

        async fn chain_id(&self) -> Result<Option<String>, ProviderFailure> {
            self.chain_id.clone()
        }

        async fn balance(&self, _account: &str) -> Result<Option<String>, ProviderFailure> {
            self.balance.clone()
        }
    }

    /// Timer that records requested delays instead of sleeping.
    #[derive(Default)]
    struct RecordingTimer {
        slept: Cell<Duration>,
    }

    #[async_trait(?Send)]
    impl Timer for RecordingTimer {
        async fn sleep(&self, duration: Duration) {
            self.slept.set(self.slept.get() + duration);
        }
    }

    fn registry_with_timer(timer: Rc<RecordingTimer>) -> ProviderRegistry {
        ProviderRegistry::new(timer, Rc::new(FixedActivity::new(Some(4), Some(20))))
    }

    fn registry() -> ProviderRegistry {
        registry_with_timer(Rc::new(RecordingTimer::default()))
    }

    fn metamask(backend: ScriptedBackend, installed: bool) -> ProviderDescriptor {
        ProviderDescriptor::live(
            "MetaMask",
            "🦊",
            "EVM wallet",
            WalletFamily::Evm,
            Rc::new(backend),
            installed,
        )
        .with_install_url("https://metamask.io/download/")
    }

    #[tokio::test]
    async fn test_live_connect_maps_every_network() {
        let registry = registry();
        for (id, name) in NETWORKS {
            let descriptor = metamask(ScriptedBackend::evm(&format!("{:#x}", id)), true);
            let info = registry.connect(&descriptor).await.unwrap();
            assert_eq!(info.network, *name);
        }
    }

    #[tokio::test]
    async fn test_live_connect_unknown_network() {
        let descriptor = metamask(ScriptedBackend::evm("0x539"), true);
        let info = registry().connect(&descriptor).await.unwrap();
        assert_eq!(info.network, "Unknown Network");
    }

    #[tokio::test]
    async fn test_live_connect_builds_record() {
        let descriptor = metamask(ScriptedBackend::evm("0x1"), true);
        let info = registry().connect(&descriptor).await.unwrap();

        assert_eq!(info.address, "0xabcdef0123456789abcdef0123456789abcdef01");
        assert_eq!(info.balance, "1.0000 ETH");
        assert_eq!(info.provider, "MetaMask");
        assert_eq!(info.nfts, Some(4));
        assert_eq!(info.transactions, Some(20));
    }

    #[tokio::test]
    async fn test_balance_failure_degrades_to_placeholder() {
        let mut backend = ScriptedBackend::evm("0x89");
        backend.balance = Err(ProviderFailure::Failed(Some("rpc down".into())));
        let info = registry().connect(&metamask(backend, true)).await.unwrap();

        assert_eq!(info.balance, "0 ETH");
        assert_eq!(info.network, "Polygon");
    }

    #[tokio::test]
    async fn test_unreadable_balance_degrades_to_placeholder() {
        let mut backend = ScriptedBackend::evm("0x89");
        backend.balance = Ok(Some("garbage".into()));
        let info = registry().connect(&metamask(backend, true)).await.unwrap();
        assert_eq!(info.balance, "0 ETH");
    }

    #[tokio::test]
    async fn test_chain_id_failure_yields_unknown_network() {
        let mut backend = ScriptedBackend::evm("0x1");
        backend.chain_id = Err(ProviderFailure::Failed(None));
        let info = registry().connect(&metamask(backend, true)).await.unwrap();
        assert_eq!(info.network, "Unknown Network");
    }

    #[tokio::test]
    async fn test_user_rejection() {
        let mut backend = ScriptedBackend::evm("0x1");
        backend.accounts = Err(ProviderFailure::Rejected);
        let err = registry().connect(&metamask(backend, true)).await.unwrap_err();
        assert_eq!(err, ConnectError::UserRejected);
    }

    #[tokio::test]
    async fn test_provider_error_message() {
        let mut backend = ScriptedBackend::evm("0x1");
        backend.accounts = Err(ProviderFailure::Failed(Some("Already processing".into())));
        let err = registry().connect(&metamask(backend, true)).await.unwrap_err();
        assert_eq!(err, ConnectError::ProviderError("Already processing".into()));
    }

    #[tokio::test]
    async fn test_provider_error_generic_message() {
        let mut backend = ScriptedBackend::evm("0x1");
        backend.accounts = Err(ProviderFailure::Failed(None));
        let err = registry().connect(&metamask(backend, true)).await.unwrap_err();
        assert_eq!(
            err,
            ConnectError::ProviderError("Failed to connect to MetaMask".into())
        );
    }

    #[tokio::test]
    async fn test_no_accounts() {
        let mut backend = ScriptedBackend::evm("0x1");
        backend.accounts = Ok(vec![String::new()]);
        let err = registry().connect(&metamask(backend, true)).await.unwrap_err();
        assert_eq!(err, ConnectError::ProviderError("No accounts found".into()));
    }

    #[tokio::test]
    async fn test_unavailable_provider_is_not_called() {
        let backend = Rc::new(ScriptedBackend::evm("0x1"));
        let descriptor = ProviderDescriptor::live(
            "MetaMask",
            "🦊",
            "EVM wallet",
            WalletFamily::Evm,
            backend.clone(),
            false,
        )
        .with_install_url("https://metamask.io/download/");

        let err = registry().connect(&descriptor).await.unwrap_err();
        assert_eq!(
            err,
            ConnectError::ProviderUnavailable {
                provider: "MetaMask".into(),
                install_url: Some("https://metamask.io/download/".into()),
            }
        );
        assert_eq!(backend.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_unavailable_provider_with_demo_fallback() {
        let descriptor = metamask(ScriptedBackend::evm("0x1"), false)
            .with_demo_fallback(DemoWallet::polygon());
        let info = registry().connect(&descriptor).await.unwrap();
        assert_eq!(info, DemoWallet::polygon().info);
    }

    #[tokio::test]
    async fn test_fixed_network_families() {
        let backend = ScriptedBackend {
            accounts: Ok(vec!["0.0.9876".into()]),
            chain_id: Ok(None),
            balance: Ok(None),
            calls: Cell::new(0),
        };
        let descriptor = ProviderDescriptor::live(
            "HashPack",
            "🔷",
            "Hedera wallet",
            WalletFamily::Hedera,
            Rc::new(backend),
            true,
        );
        let info = registry().connect(&descriptor).await.unwrap();
        assert_eq!(info.network, "Hedera");
        assert_eq!(info.balance, "0 HBAR");
    }

    #[tokio::test]
    async fn test_demo_connect_waits_and_returns_catalog_record() {
        let timer = Rc::new(RecordingTimer::default());
        let registry = registry_with_timer(timer.clone()).with_demo_catalog();
        let descriptor = registry.find("Demo Polygon").unwrap().clone();

        let info = registry.connect(&descriptor).await.unwrap();
        assert_eq!(info.address, "0x742d35Cc6634C0532925a3b8D4C9db96590c4C87");
        assert_eq!(info.network, "Polygon");
        assert_eq!(info.balance, "125.50 MATIC");
        assert_eq!(timer.slept.get(), DEMO_CONNECT_DELAY);
    }

    #[test]
    fn test_list_order_is_registration_order() {
        let mut registry = registry();
        registry.register(metamask(ScriptedBackend::evm("0x1"), false));
        let registry = registry.with_demo_catalog();

        let names: Vec<_> = registry
            .list_providers()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["MetaMask", "Demo Polygon", "Demo Solana", "Demo Hedera"]
        );
        assert!(!registry.list_providers()[0].available);
        assert!(registry.find("Trust").is_none());
    }
}
