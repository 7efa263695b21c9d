//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! wallet actions triggered from the UI.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use walletdock_core::features::{find_feature, run_feature};
use walletdock_core::format::explorer_url;
use walletdock_core::provider::RandomActivity;
use walletdock_core::{
    ActivitySource, Notice, Notifier, SessionStore, WalletController, WalletState,
};

use crate::components::{Toaster, ToastNotifier, ToastQueue, WalletConnect, WalletFeatures};
use crate::config::APP_NAME;
use crate::utils::{BrowserSessionStorage, GlooTimer, dom};
use crate::wallets;

stylance::import_crate_style!(css, "src/app.module.css");

/// Wallet controller wired to the browser's storage and toasts.
pub type AppController = WalletController<BrowserSessionStorage, ToastNotifier>;

/// Display data for one entry of the connect menu.
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderOption {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub available: bool,
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
///
/// The controller is the source of truth for the wallet session; `wallet`
/// mirrors it and is updated after every session change.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Wallet connection state.
    pub wallet: RwSignal<WalletState>,
    /// A connect attempt is outstanding.
    pub connecting: RwSignal<bool>,
    /// Id of the feature whose action is outstanding.
    pub running_feature: RwSignal<Option<&'static str>>,
    /// Learning token balance of the connected wallet.
    pub edu_tokens: RwSignal<u32>,
    /// Visible toast notifications.
    pub toasts: RwSignal<ToastQueue>,
    controller: StoredValue<Rc<AppController>, LocalStorage>,
}

impl AppContext {
    /// Creates the context, detects installed wallets, and restores any
    /// session saved earlier in this browser session.
    pub fn new() -> Self {
        let wallet = RwSignal::new(WalletState::default());
        let toasts = RwSignal::new(ToastQueue::default());
        let edu_tokens = RwSignal::new(0);

        let activity: Rc<dyn ActivitySource> = Rc::new(RandomActivity);
        let registry = wallets::detect_wallets(Rc::new(GlooTimer), activity.clone());
        let controller = WalletController::new(
            registry,
            SessionStore::new(BrowserSessionStorage),
            ToastNotifier::new(toasts),
        );
        controller.subscribe(move |state| {
            edu_tokens.set(if state.is_connected() { activity.edu_tokens() } else { 0 });
            wallet.set(state.clone());
        });
        controller.restore();

        Self {
            wallet,
            connecting: RwSignal::new(false),
            running_feature: RwSignal::new(None),
            edu_tokens,
            toasts,
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    fn notify(&self, notice: Notice) {
        ToastNotifier::new(self.toasts).notify(notice);
    }

    /// Connect menu entries in registration order.
    pub fn provider_options(&self) -> Vec<ProviderOption> {
        self.controller.with_value(|c| {
            c.providers()
                .iter()
                .map(|p| ProviderOption {
                    name: p.name.clone(),
                    icon: p.icon.clone(),
                    description: p.description.clone(),
                    available: p.available,
                })
                .collect()
        })
    }

    /// Start a connect attempt. Ignored while another one is outstanding.
    pub fn connect(&self, provider: &str) {
        if self.connecting.get_untracked() {
            return;
        }

        let controller = self.controller.get_value();
        let Some(descriptor) = controller.registry().find(provider).cloned() else {
            log::warn!("unknown provider {}", provider);
            return;
        };

        let connecting = self.connecting;
        connecting.set(true);
        spawn_local(async move {
            // Outcomes are reported through the toast notifier.
            let _ = controller.connect(&descriptor).await;
            connecting.set(false);
        });
    }

    pub fn disconnect(&self) {
        self.controller.with_value(|c| c.disconnect());
    }

    /// Copy the connected address to the clipboard.
    pub fn copy_address(&self) {
        let Some(address) = self.wallet.with_untracked(|w| w.info().map(|i| i.address.clone())) else {
            return;
        };

        let ctx = *self;
        spawn_local(async move {
            if dom::copy_to_clipboard(&address).await {
                ctx.notify(Notice::success(
                    "Address copied",
                    "Wallet address copied to clipboard",
                ));
            } else {
                ctx.notify(Notice::error("Copy failed", "Could not access the clipboard"));
            }
        });
    }

    /// Open the connected address on its network's block explorer.
    pub fn open_explorer(&self) {
        if let Some(url) = self.wallet.with_untracked(|w| w.info().map(explorer_url)) {
            dom::open_in_new_tab(&url);
        }
    }

    /// Run a feature's simulated action for the connected wallet.
    pub fn run_feature(&self, id: &str) {
        let Some(feature) = find_feature(id) else {
            return;
        };
        if self.running_feature.get_untracked().is_some() {
            return;
        }

        let ctx = *self;
        let wallet = self.wallet.get_untracked();
        ctx.running_feature.set(Some(feature.id));
        spawn_local(async move {
            match run_feature(feature, wallet.info(), &GlooTimer).await {
                Ok(outcome) => {
                    if let Some(text) = outcome.clipboard {
                        dom::copy_to_clipboard(text).await;
                    }
                    ctx.notify(outcome.notice);
                }
                Err(e) => ctx.notify(e.notice()),
            }
            ctx.running_feature.set(None);
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Creates and provides the global AppContext, then renders the header with
/// the wallet menu, the feature panel, and the toast viewport.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <div class=css::page>
            <header class=css::header>
                <span class=css::brand>{APP_NAME}</span>
                <WalletConnect />
            </header>
            <main class=css::main>
                <WalletFeatures />
            </main>
            <Toaster />
        </div>
    }
}
