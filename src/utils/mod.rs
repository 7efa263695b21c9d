//! Browser utilities and host capabilities.
//!
//! Provides:
//! - [`dom`] - Window, sessionStorage, clipboard, and navigation helpers
//! - [`BrowserSessionStorage`] - sessionStorage backend for the wallet session
//! - [`GlooTimer`] - `setTimeout` based delays
//! - [`logger`] - `log` backend writing to the browser console

pub mod dom;
pub mod logger;
mod storage;
mod timer;

pub use storage::BrowserSessionStorage;
pub use timer::GlooTimer;
