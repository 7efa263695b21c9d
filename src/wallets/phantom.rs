//! Phantom (Solana) wallet backend via `window.solana`.

use async_trait::async_trait;
use js_sys::{Array, Object};
use wasm_bindgen::JsCast;
use walletdock_core::{ProviderFailure, WalletBackend};

use super::js;

/// Check if Phantom is installed
pub fn is_available() -> bool {
    js::injected("solana").is_some_and(|s| js::flag(&s, "isPhantom"))
}

/// [`WalletBackend`] for Phantom. Balance lookups need an RPC node and are
/// left to the placeholder.
#[derive(Clone, Copy, Debug, Default)]
pub struct Phantom;

#[async_trait(?Send)]
impl WalletBackend for Phantom {
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderFailure> {
        let solana = js::injected("solana")
            .ok_or_else(|| ProviderFailure::Failed(Some("Phantom wallet not installed".into())))?;

        let response = js::call_async(&solana, "connect", &Array::new()).await?;
        let public_key = js::get(&response, "publicKey")
            .and_then(|k| k.dyn_into::<Object>().ok())
            .map(|k| String::from(k.to_string()));

        Ok(public_key.into_iter().collect())
    }
}
