//! MetaMask (EIP-1193) wallet backend.
//!
//! Talks to `window.ethereum` through direct JavaScript interop via the
//! Reflect API.

use async_trait::async_trait;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use walletdock_core::{ProviderFailure, WalletBackend};

use super::js;

/// Get the window.ethereum object injected by MetaMask.
fn get_ethereum() -> Result<Object, ProviderFailure> {
    js::injected("ethereum")
        .ok_or_else(|| ProviderFailure::Failed(Some("MetaMask not installed".to_string())))
}

/// Helper to call ethereum.request({ method, params })
async fn ethereum_request(method: &str, params: Option<Array>) -> Result<JsValue, ProviderFailure> {
    let ethereum = get_ethereum()?;

    let args = Object::new();
    let request_failed = |_| ProviderFailure::Failed(Some("Failed to create wallet request".into()));
    Reflect::set(&args, &"method".into(), &method.into()).map_err(request_failed)?;
    if let Some(params) = params {
        Reflect::set(&args, &"params".into(), &params).map_err(request_failed)?;
    }

    js::call_async(&ethereum, "request", &Array::of1(&args)).await
}

/// Check if MetaMask is installed
pub fn is_available() -> bool {
    js::injected("ethereum").is_some_and(|e| js::flag(&e, "isMetaMask"))
}

/// [`WalletBackend`] for MetaMask.
#[derive(Clone, Copy, Debug, Default)]
pub struct MetaMask;

#[async_trait(?Send)]
impl WalletBackend for MetaMask {
    /// Request wallet connection (shows MetaMask popup)
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderFailure> {
        let result = ethereum_request("eth_requestAccounts", None).await?;
        Ok(js::strings(&result))
    }

    async fn chain_id(&self) -> Result<Option<String>, ProviderFailure> {
        let result = ethereum_request("eth_chainId", None).await?;
        Ok(result.as_string())
    }

    /// Balance in wei as a hex string
    async fn balance(&self, account: &str) -> Result<Option<String>, ProviderFailure> {
        let params = Array::of2(&account.into(), &"latest".into());
        let result = ethereum_request("eth_getBalance", Some(params)).await?;
        Ok(result.as_string())
    }
}
