//! Reflect-based helpers for talking to injected wallet objects.

use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use walletdock_core::ProviderFailure;

use crate::utils::dom;

/// Get `window[name]` if it is an object.
pub fn injected(name: &str) -> Option<Object> {
    let window = dom::window()?;
    Reflect::get(&window, &name.into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
}

/// Read a property.
pub fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &key.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Read a boolean flag such as `isMetaMask`.
pub fn flag(target: &JsValue, key: &str) -> bool {
    get(target, key).and_then(|v| v.as_bool()).unwrap_or(false)
}

/// Call `target[method](...args)` and await the returned promise.
pub async fn call_async(target: &Object, method: &str, args: &Array) -> Result<JsValue, ProviderFailure> {
    let function = get(target, method)
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or_else(|| ProviderFailure::Failed(Some(format!("wallet does not support {}", method))))?;

    let result = function.apply(target, args).map_err(failure_from_js)?;
    let promise = Promise::resolve(&result);

    JsFuture::from(promise).await.map_err(failure_from_js)
}

/// Classify a thrown/rejected JS value by its EIP-1193 `code` and `message`.
pub fn failure_from_js(err: JsValue) -> ProviderFailure {
    let code = get(&err, "code").and_then(|c| c.as_f64()).map(|c| c as i64);
    let message = get(&err, "message")
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string());
    ProviderFailure::from_code(code, message)
}

/// Collect the string entries of a JS array.
pub fn strings(value: &JsValue) -> Vec<String> {
    if !Array::is_array(value) {
        return Vec::new();
    }
    Array::from(value)
        .iter()
        .filter_map(|v| v.as_string())
        .collect()
}
