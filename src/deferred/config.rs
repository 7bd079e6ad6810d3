//! Latency configuration.

use std::time::Duration;

/// Configuration for deferred computations.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_basics::deferred::DeferredConfig;
///
/// let config = DeferredConfig::default().with_delay(Duration::from_millis(50));
/// assert_eq!(config.delay, Duration::from_millis(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredConfig {
    /// How long to wait before producing the result.
    pub delay: Duration,
}

impl Default for DeferredConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1000),
        }
    }
}

impl DeferredConfig {
    /// A configuration with no delay.
    pub fn immediate() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}
