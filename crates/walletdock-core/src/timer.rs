//! Timer capability for artificial delays.

use std::time::Duration;

use async_trait::async_trait;

/// Suspends the current task for a duration.
///
/// Browser builds use `gloo-timers`; tests use [`NoDelay`] to run instantly.
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// Timer that returns immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

#[async_trait(?Send)]
impl Timer for NoDelay {
    async fn sleep(&self, _duration: Duration) {}
}
