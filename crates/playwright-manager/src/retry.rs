// Bounded retry for flaky engine startup.

use crate::error::Result;
use std::future::Future;
use std::time::Duration;

/// Runs `action`, and on failure retries it exactly once after `delay`.
///
/// The first failure is logged and recovered locally; if the retry fails as
/// well, that second error propagates to the caller. Connection startup is
/// the only call site: the driver is observed to intermittently fail to
/// initialize at process start.
pub async fn once_with_delay<T, F, Fut>(mut action: F, delay: Duration) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    match action().await {
        Ok(value) => Ok(value),
        Err(first) => {
            tracing::warn!(error = %first, delay_ms = delay.as_millis() as u64, "Attempt failed, retrying once after delay");
            tokio::time::sleep(delay).await;
            action().await
        }
    }
}
