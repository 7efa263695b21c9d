//! Toast notifications.
//!
//! [`ToastNotifier`] is the browser's [`Notifier`]: notices from the wallet
//! core land in a bounded [`ToastQueue`] and expire after a fixed time.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::Icon;
use walletdock_core::{Notice, Notifier, Severity};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::toast;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/toast/toast.module.css");

// ============================================================================
// ToastQueue
// ============================================================================

/// A notice on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Bounded list of visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Add a notice and return its id. Drops the oldest toast when full.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push(Toast { id, notice });
        if self.items.len() > toast::MAX_VISIBLE {
            self.items.remove(0);
        }
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

// ============================================================================
// ToastNotifier
// ============================================================================

/// [`Notifier`] pushing into the app's toast queue.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastQueue>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastQueue>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        let toasts = self.toasts;
        let Some(id) = toasts.try_update(|q| q.push(notice)) else {
            return;
        };

        Timeout::new(toast::DURATION_MS, move || {
            toasts.try_update(|q| q.dismiss(id));
        })
        .forget();
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => css::info,
        Severity::Success => css::success,
        Severity::Error => css::error,
    }
}

// ============================================================================
// Toaster Component
// ============================================================================

/// Stack of active toasts in the corner of the screen.
#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let toasts = ctx.toasts;

    view! {
        <div class=css::viewport>
            <For
                each=move || toasts.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("{} {}", css::toast, severity_class(toast.notice.severity));
                    let action = toast.notice.action.clone();

                    view! {
                        <div class=class role="status">
                            <div class=css::body>
                                <div class=css::title>{toast.notice.title.clone()}</div>
                                <div class=css::description>{toast.notice.description.clone()}</div>
                            </div>
                            {action.map(|action| {
                                let url = action.url.clone();
                                view! {
                                    <button
                                        class=css::action
                                        on:click=move |_| dom::open_in_new_tab(&url)
                                    >
                                        {action.label}
                                    </button>
                                }
                            })}
                            <button
                                class=css::close
                                title="Dismiss"
                                on:click=move |_| toasts.update(|q| q.dismiss(id))
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
