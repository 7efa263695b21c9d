//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen_futures::JsFuture;
use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Open a URL in a new tab.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window()
        && let Err(e) = window.open_with_url_and_target(url, "_blank")
    {
        log::warn!("failed to open {}: {:?}", url, e);
    }
}

/// Write text to the system clipboard.
///
/// Returns `true` if the browser accepted the write.
pub async fn copy_to_clipboard(text: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };

    let promise = window.navigator().clipboard().write_text(text);
    match JsFuture::from(promise).await {
        Ok(_) => true,
        Err(e) => {
            log::warn!("clipboard write failed: {:?}", e);
            false
        }
    }
}
