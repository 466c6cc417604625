//! Progress hooks for the retry loop.

use std::error::Error;
use std::time::Duration;

/// Receives progress events from [`BackoffStrategy::execute_until`].
///
/// Every hook has an empty default, so implementors only override what they
/// report. `()` is the silent observer.
///
/// [`BackoffStrategy::execute_until`]: super::BackoffStrategy::execute_until
pub trait RetryObserver: Send + Sync {
    /// Called right before attempt number `attempt` (1-indexed) runs.
    fn on_attempt(&self, attempt: u32, max_attempts: u32) {
        let _ = (attempt, max_attempts);
    }

    /// Called after attempt number `attempt` failed.
    fn on_failure(&self, attempt: u32, error: &(dyn Error + 'static)) {
        let _ = (attempt, error);
    }

    /// Called before sleeping `delay` following the failure of `attempt`.
    fn on_backoff(&self, attempt: u32, delay: Duration) {
        let _ = (attempt, delay);
    }
}

impl RetryObserver for () {}

/// Reports retry progress through `tracing` events.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

#[cfg(feature = "tracing")]
impl RetryObserver for TracingObserver {
    fn on_attempt(&self, attempt: u32, max_attempts: u32) {
        tracing::debug!(attempt, max_attempts, "Starting attempt");
    }

    fn on_failure(&self, attempt: u32, error: &(dyn Error + 'static)) {
        tracing::warn!(attempt, error = %error, "Attempt failed");
    }

    fn on_backoff(&self, attempt: u32, delay: Duration) {
        tracing::debug!(
            attempt,
            delay_ms = delay_millis(delay),
            "Backing off before next attempt"
        );
    }
}

/// Whole milliseconds in `delay`, saturating at `u64::MAX`.
#[cfg(feature = "tracing")]
fn delay_millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(all(test, feature = "tracing"))]
mod tests {
    use super::*;

    #[test]
    fn test_delay_millis_saturates() {
        assert_eq!(delay_millis(Duration::from_millis(2000)), 2000);
        assert_eq!(delay_millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn test_tracing_observer_accepts_saturated_delay() {
        TracingObserver.on_backoff(3, Duration::MAX);
    }
}
