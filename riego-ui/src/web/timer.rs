//! Async delay over the browser timer.

use gloo_timers::future::TimeoutFuture;
use std::time::Duration;

/// Resolve after `delay` (browser `setTimeout`).
pub async fn sleep(delay: Duration) {
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    TimeoutFuture::new(millis).await;
}
