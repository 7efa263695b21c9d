//! Header wallet menu.
//!
//! Disconnected: a connect button opening the provider list.
//! Connected: an account button opening the wallet details.

use leptos::prelude::*;
use leptos_icons::Icon;
use walletdock_core::WalletInfo;
use walletdock_core::format::shorten_address;

use crate::app::{AppContext, ProviderOption};
use crate::components::icons as ic;
use crate::config::WALLET_GUIDE_URL;

stylance::import_crate_style!(css, "src/components/wallet_connect/wallet_connect.module.css");

/// Wallet button with its dropdown menu.
#[component]
pub fn WalletConnect() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (menu_open, set_menu_open) = signal(false);

    let is_connected = Signal::derive(move || ctx.wallet.with(|w| w.is_connected()));

    // Close the menu once a connection lands or the session ends
    Effect::new(move |prev: Option<bool>| {
        let connected = is_connected.get();
        if prev.is_some_and(|p| p != connected) {
            set_menu_open.set(false);
        }
        connected
    });

    view! {
        <div class=css::container>
            <Show
                when=move || is_connected.get()
                fallback=move || view! { <ConnectButton menu_open=menu_open set_menu_open=set_menu_open /> }
            >
                <AccountButton menu_open=menu_open set_menu_open=set_menu_open />
            </Show>

            <Show when=move || menu_open.get()>
                <div class=css::backdrop on:click=move |_| set_menu_open.set(false)></div>
                <div class=css::menu>
                    {move || match ctx.wallet.with(|w| w.info().cloned()) {
                        Some(info) => view! { <AccountDetails info=info set_menu_open=set_menu_open /> }.into_any(),
                        None => view! { <ProviderList /> }.into_any(),
                    }}
                </div>
            </Show>
        </div>
    }
}

/// Button shown while no wallet is connected.
#[component]
fn ConnectButton(menu_open: ReadSignal<bool>, set_menu_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let connecting = ctx.connecting;

    view! {
        <button
            class=css::button
            disabled=move || connecting.get()
            on:click=move |_| set_menu_open.set(!menu_open.get_untracked())
        >
            <Icon icon=ic::WALLET />
            <span>
                {move || if connecting.get() { "Connecting..." } else { "Connect Wallet" }}
            </span>
        </button>
    }
}

/// Button shown for a connected wallet.
#[component]
fn AccountButton(menu_open: ReadSignal<bool>, set_menu_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let display_name = Signal::derive(move || ctx.wallet.with(|w| w.display_name()));

    view! {
        <button
            class=css::accountButton
            on:click=move |_| set_menu_open.set(!menu_open.get_untracked())
        >
            <span class=css::connectedIcon><Icon icon=ic::CONNECTED /></span>
            <span class=css::mono>{display_name}</span>
        </button>
    }
}

/// Provider list for the disconnected menu.
#[component]
fn ProviderList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let connecting = ctx.connecting;
    let options = ctx.provider_options();

    view! {
        <div class=css::menuHeader>
            <div class=css::menuTitle>"Connect a wallet"</div>
            <div class=css::menuSubtitle>"Choose how you want to connect"</div>
        </div>

        <ul class=css::providers>
            {options
                .into_iter()
                .map(|option| view! { <ProviderItem option=option connecting=connecting /> })
                .collect_view()}
        </ul>

        <a class=css::help href=WALLET_GUIDE_URL>
            "💡 Need help? Visit our wallet setup guide"
        </a>
    }
}

/// One connection option.
///
/// Uninstalled wallets stay clickable so the controller can report the
/// install link.
#[component]
fn ProviderItem(option: ProviderOption, connecting: RwSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let name = option.name.clone();

    view! {
        <li>
            <button
                class=css::provider
                disabled=move || connecting.get()
                on:click=move |_| ctx.connect(&name)
            >
                <span class=css::providerIcon>{option.icon}</span>
                <span class=css::providerBody>
                    <span class=css::providerName>
                        {option.name}
                        {(!option.available).then(|| view! {
                            <span class=css::badge>"Not Installed"</span>
                        })}
                    </span>
                    <span class=css::providerDescription>{option.description}</span>
                </span>
                {(!option.available).then(|| view! {
                    <span class=css::alertIcon><Icon icon=ic::ALERT /></span>
                })}
            </button>
        </li>
    }
}

/// Connected wallet details and actions.
#[component]
fn AccountDetails(info: WalletInfo, set_menu_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let stat = |value: Option<u32>| value.map_or_else(|| "-".to_string(), |n| n.to_string());

    view! {
        <div class=css::menuHeader>
            <span class=css::network>{info.network.clone()}</span>
            <div class=css::address title=info.address.clone()>
                {shorten_address(&info.address)}
            </div>
        </div>

        <dl class=css::stats>
            <div class=css::stat>
                <dt>"Balance"</dt>
                <dd>{info.balance.clone()}</dd>
            </div>
            <div class=css::stat>
                <dt>"NFTs"</dt>
                <dd>{stat(info.nfts)}</dd>
            </div>
            <div class=css::stat>
                <dt>"Transactions"</dt>
                <dd>{stat(info.transactions)}</dd>
            </div>
        </dl>

        <div class=css::providerLine>"Provider: " {info.provider.clone()}</div>

        <div class=css::actions>
            <button class=css::action on:click=move |_| ctx.copy_address()>
                <Icon icon=ic::COPY />
                <span>"Copy Address"</span>
            </button>
            <button class=css::action on:click=move |_| ctx.open_explorer()>
                <Icon icon=ic::EXTERNAL_LINK />
                <span>"View on Explorer"</span>
            </button>
            <button
                class=css::disconnect
                on:click=move |_| {
                    set_menu_open.set(false);
                    ctx.disconnect();
                }
            >
                <Icon icon=ic::LOG_OUT />
                <span>"Disconnect"</span>
            </button>
        </div>
    }
}
