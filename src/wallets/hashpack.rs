//! HashPack (Hedera) wallet backend via `window.hashpack`.

use async_trait::async_trait;
use js_sys::Array;
use walletdock_core::{ProviderFailure, WalletBackend};

use super::js;

/// Check if HashPack is installed
pub fn is_available() -> bool {
    js::injected("hashpack").is_some()
}

/// [`WalletBackend`] for HashPack. Accounts are dotted Hedera ids (`0.0.1234`).
#[derive(Clone, Copy, Debug, Default)]
pub struct HashPack;

#[async_trait(?Send)]
impl WalletBackend for HashPack {
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderFailure> {
        let hashpack = js::injected("hashpack")
            .ok_or_else(|| ProviderFailure::Failed(Some("HashPack wallet not installed".into())))?;

        let response = js::call_async(&hashpack, "connectToLocalWallet", &Array::new()).await?;
        if !js::flag(&response, "success") {
            return Err(ProviderFailure::Failed(Some(
                "Failed to connect to HashPack".to_string(),
            )));
        }

        let account_ids = js::get(&response, "data")
            .and_then(|data| js::get(&data, "accountIds"))
            .map(|ids| js::strings(&ids))
            .unwrap_or_default();
        Ok(account_ids)
    }
}
