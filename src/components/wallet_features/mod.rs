//! Wallet profile and feature cards.

use leptos::prelude::*;
use leptos_icons::Icon;
use walletdock_core::WalletInfo;
use walletdock_core::features::{FEATURES, Feature};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/wallet_features/wallet_features.module.css");

/// Feature panel. Shows a connect prompt until a wallet is connected.
#[component]
pub fn WalletFeatures() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let is_connected = Signal::derive(move || ctx.wallet.with(|w| w.is_connected()));

    view! {
        <Show when=move || is_connected.get() fallback=|| view! { <ConnectPrompt /> }>
            <section class=css::panel>
                <Profile />
                <div class=css::grid>
                    {FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect_view()}
                </div>
            </section>
        </Show>
    }
}

/// Placeholder card for a disconnected session.
#[component]
fn ConnectPrompt() -> impl IntoView {
    view! {
        <section class=css::prompt>
            <span class=css::promptIcon><Icon icon=ic::WALLET /></span>
            <h2 class=css::promptTitle>"Web3 Features"</h2>
            <p class=css::promptText>
                "Connect your wallet to purchase courses, earn tokens, and unlock rewards"
            </p>
            <button class=css::primary disabled=true>"Connect Wallet to Continue"</button>
        </section>
    }
}

/// Summary of the connected wallet.
#[component]
fn Profile() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let field = move |f: fn(&WalletInfo) -> String| {
        move || ctx.wallet.with(|w| w.info().map(f).unwrap_or_default())
    };

    view! {
        <div class=css::profile>
            <div class=css::profileHeader>
                <span class=css::profileTitle>"Your Wallet Profile"</span>
                <span class=css::network>{field(|i| i.network.clone())}</span>
            </div>
            <div class=css::profileStats>
                <div class=css::stat>
                    <span class=css::statLabel>"Balance"</span>
                    <span class=css::statValue>{field(|i| i.balance.clone())}</span>
                </div>
                <div class=css::stat>
                    <span class=css::statLabel>"NFTs Owned"</span>
                    <span class=css::statValue>{field(|i| count_label(i.nfts))}</span>
                </div>
                <div class=css::stat>
                    <span class=css::statLabel>"Transactions"</span>
                    <span class=css::statValue>{field(|i| count_label(i.transactions))}</span>
                </div>
                <div class=css::stat>
                    <span class=css::statLabel>"EDU Tokens"</span>
                    <span class=css::statValue>{move || ctx.edu_tokens.get()}</span>
                </div>
            </div>
        </div>
    }
}

fn count_label(n: Option<u32>) -> String {
    n.map_or_else(|| "-".to_string(), |n| n.to_string())
}

/// One feature with its action button.
#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let available = Signal::derive(move || ctx.wallet.with(|w| feature.is_available(w.info())));
    let processing = Signal::derive(move || ctx.running_feature.get() == Some(feature.id));
    let busy = Signal::derive(move || ctx.running_feature.get().is_some());

    let card_class = move || {
        if available.get() {
            css::card.to_string()
        } else {
            format!("{} {}", css::card, css::locked)
        }
    };

    view! {
        <article class=card_class>
            <div class=css::cardHeader>
                <span class=css::cardIcon><Icon icon=ic::feature_icon(feature.id) /></span>
                <Show when=move || !available.get()>
                    <span class=css::lockedBadge>"Locked"</span>
                </Show>
            </div>
            <h3 class=css::cardTitle>{feature.title}</h3>
            <p class=css::cardText>{feature.description}</p>

            <div class=css::terms>
                {feature.cost.map(|cost| view! {
                    <span class=css::cost>"Cost: " {cost}</span>
                })}
                {feature.reward.map(|reward| view! {
                    <span class=css::reward>"Reward: " {reward}</span>
                })}
            </div>

            <button
                class=css::primary
                disabled=move || !available.get() || busy.get()
                on:click=move |_| ctx.run_feature(feature.id)
            >
                {move || if processing.get() { "Processing..." } else { feature.action }}
            </button>
        </article>
    }
}
