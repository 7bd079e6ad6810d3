//! Delayed square-or-fail.

use tokio::time::sleep;
use tracing::debug;

use super::config::DeferredConfig;
use crate::error::{Error, Result};

/// Error message for negative inputs to [`square_async`].
pub const NEGATIVE_INPUT_MESSAGE: &str = "Negative number not allowed";

/// Waits `config.delay`, then returns `n * n`.
///
/// The outcome depends only on `n`; only the completion time varies. Must be
/// polled inside a tokio runtime with the time driver enabled.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] with [`NEGATIVE_INPUT_MESSAGE`] when
/// `n < 0`. The failure is reported only after the delay has elapsed.
///
/// # Examples
///
/// ```
/// use u_basics::deferred::{square_async, DeferredConfig};
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let config = DeferredConfig::immediate();
/// assert_eq!(square_async(4.0, &config).await, Ok(16.0));
/// assert_eq!(
///     square_async(-1.0, &config).await.unwrap_err().to_string(),
///     "Negative number not allowed"
/// );
/// # });
/// ```
pub async fn square_async(n: f64, config: &DeferredConfig) -> Result<f64> {
    debug!(n, delay = ?config.delay, "square scheduled");
    sleep(config.delay).await;

    if n < 0.0 {
        debug!(n, "square rejected");
        return Err(Error::InvalidArgument(NEGATIVE_INPUT_MESSAGE.into()));
    }

    let squared = n * n;
    debug!(n, squared, "square resolved");
    Ok(squared)
}

/// [`square_async`] with the default one-second delay.
pub async fn square_with_default_delay(n: f64) -> Result<f64> {
    square_async(n, &DeferredConfig::default()).await
}
