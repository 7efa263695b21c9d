//! Connect/disconnect flows as triggered from the UI.
//!
//! [`WalletController`] is the boundary where connect-path failures stop: each
//! outcome becomes exactly one [`Notice`] and nothing propagates further.

use std::cell::{Cell, RefCell};

use log::{info, warn};

use crate::error::ConnectError;
use crate::models::{WalletInfo, WalletState};
use crate::notify::{Notice, Notifier};
use crate::provider::{ProviderDescriptor, ProviderRegistry};
use crate::session::SessionStore;
use crate::storage::SessionStorage;

type StateListener = Box<dyn Fn(&WalletState)>;

/// Owns the session store and the provider registry for one UI session.
pub struct WalletController<S, N> {
    registry: ProviderRegistry,
    store: RefCell<SessionStore<S>>,
    notifier: N,
    connecting: Cell<bool>,
    listeners: RefCell<Vec<StateListener>>,
}

/// Clears the in-flight flag when a connect attempt ends.
struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<S: SessionStorage, N: Notifier> WalletController<S, N> {
    pub fn new(registry: ProviderRegistry, store: SessionStore<S>, notifier: N) -> Self {
        Self {
            registry,
            store: RefCell::new(store),
            notifier,
            connecting: Cell::new(false),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Call `listener` with the new state after every store mutation.
    pub fn subscribe(&self, listener: impl Fn(&WalletState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Restore the persisted session. Run once at startup.
    pub fn restore(&self) -> bool {
        let connected = self.store.borrow_mut().restore();
        self.publish();
        connected
    }

    /// Connection options in display order.
    pub fn providers(&self) -> &[ProviderDescriptor] {
        self.registry.list_providers()
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Current state of the session.
    pub fn state(&self) -> WalletState {
        self.store.borrow().state()
    }

    /// Whether a connect attempt is outstanding.
    pub fn is_connecting(&self) -> bool {
        self.connecting.get()
    }

    /// Connect through `descriptor` and commit the result.
    ///
    /// Every outcome is reported to the notifier. The returned result is for
    /// callers that want to react further; it never needs handling.
    pub async fn connect(&self, descriptor: &ProviderDescriptor) -> Result<WalletInfo, ConnectError> {
        if self.connecting.replace(true) {
            warn!("ignoring connect to {}: another attempt is in flight", descriptor.name);
            return Err(ConnectError::Busy);
        }
        let _in_flight = InFlight(&self.connecting);

        let info = match self.registry.connect(descriptor).await {
            Ok(info) => info,
            Err(err) => {
                warn!("connect to {} failed: {}", descriptor.name, err);
                self.notifier.notify(failure_notice(&descriptor.name, &err));
                return Err(err);
            }
        };

        if let Err(e) = self.store.borrow_mut().commit(info.clone()) {
            let err = ConnectError::ProviderError(e.to_string());
            self.notifier.notify(failure_notice(&descriptor.name, &err));
            return Err(err);
        }
        self.publish();

        info!("wallet connected via {}", descriptor.name);
        self.notifier.notify(Notice::success(
            "Wallet connected successfully",
            format!("Connected to {}", descriptor.name),
        ));
        Ok(info)
    }

    /// Clear the session.
    pub fn disconnect(&self) {
        self.store.borrow_mut().clear();
        self.publish();

        info!("wallet disconnected");
        self.notifier.notify(Notice::info(
            "Wallet disconnected",
            "Your wallet has been disconnected",
        ));
    }

    fn publish(&self) {
        let state = self.state();
        for listener in self.listeners.borrow().iter() {
            listener(&state);
        }
    }
}

/// Notice shown for a failed connect attempt.
pub fn failure_notice(provider: &str, err: &ConnectError) -> Notice {
    match err {
        ConnectError::ProviderUnavailable { install_url, .. } => {
            let notice = Notice::error(
                "Wallet not installed",
                format!("Please install {} to continue", provider),
            );
            match install_url {
                Some(url) => notice.with_action("Install", url.clone()),
                None => notice,
            }
        }
        ConnectError::UserRejected => Notice::info("Connection cancelled", err.to_string()),
        ConnectError::ProviderError(_) | ConnectError::Busy => {
            Notice::error("Connection failed", err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::notify::Severity;
    use crate::provider::{DemoWallet, FixedActivity};
    use crate::storage::MemoryStorage;
    use crate::timer::NoDelay;

    fn controller(
        notices: Rc<RefCell<Vec<Notice>>>,
    ) -> WalletController<MemoryStorage, impl Notifier> {
        let registry =
            ProviderRegistry::new(Rc::new(NoDelay), Rc::new(FixedActivity::default())).with_demo_catalog();
        WalletController::new(
            registry,
            SessionStore::new(MemoryStorage::new()),
            move |notice: Notice| notices.borrow_mut().push(notice),
        )
    }

    #[tokio::test]
    async fn test_demo_connect_commits_and_notifies() {
        let notices = Rc::new(RefCell::new(Vec::new()));
        let controller = controller(notices.clone());
        let descriptor = controller.registry().find("Demo Solana").unwrap().clone();

        let info = controller.connect(&descriptor).await.unwrap();
        assert_eq!(info, DemoWallet::solana().info);
        assert_eq!(controller.state(), WalletState::Connected(info));
        assert!(!controller.is_connecting());

        let notices = notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Wallet connected successfully");
        assert_eq!(notices[0].description, "Connected to Demo Solana");
        assert_eq!(notices[0].severity, Severity::Success);
    }

    #[tokio::test]
    async fn test_disconnect_notifies_and_publishes() {
        let notices = Rc::new(RefCell::new(Vec::new()));
        let controller = controller(notices.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        controller.subscribe(move |state| sink.borrow_mut().push(state.is_connected()));

        let descriptor = controller.registry().find("Demo Hedera").unwrap().clone();
        controller.connect(&descriptor).await.unwrap();
        controller.disconnect();

        assert_eq!(*seen.borrow(), vec![true, false]);
        assert_eq!(controller.state(), WalletState::Disconnected);
        assert_eq!(notices.borrow()[1].title, "Wallet disconnected");
    }

    #[test]
    fn test_failure_notices() {
        let unavailable = ConnectError::ProviderUnavailable {
            provider: "Phantom".into(),
            install_url: Some("https://phantom.app/download".into()),
        };
        let notice = failure_notice("Phantom", &unavailable);
        assert_eq!(notice.title, "Wallet not installed");
        assert_eq!(notice.description, "Please install Phantom to continue");
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(
            notice.action.map(|a| a.url),
            Some("https://phantom.app/download".to_string())
        );

        let rejected = failure_notice("Phantom", &ConnectError::UserRejected);
        assert_eq!(rejected.severity, Severity::Info);

        let failed = failure_notice("Phantom", &ConnectError::ProviderError("boom".into()));
        assert_eq!(failed.title, "Connection failed");
        assert_eq!(failed.description, "boom");
    }
}
