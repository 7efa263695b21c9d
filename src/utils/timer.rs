//! Browser timer backed by `setTimeout`.

use std::time::Duration;

use async_trait::async_trait;
use walletdock_core::Timer;

/// [`Timer`] using `gloo-timers`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
