//! Platform-specific async utilities.
//!
//! - **Desktop**: tokio timers
//! - **Web**: `setTimeout` through gloo-timers (tokio's timer needs a runtime
//!   that does not exist in the browser)

use std::time::Duration;

/// Suspends the current task for `duration`.
///
/// ```ignore
/// use crate::platform::sleep;
/// use realty_core::config::NOTIFICATION_DISMISS;
///
/// sleep(NOTIFICATION_DISMISS).await;
/// ```
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
