//! Exponential backoff without jitter.

use super::strategy::BackoffStrategy;
use std::time::Duration;

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(2000);
const DEFAULT_MULTIPLIER: u32 = 2;

/// Exponential backoff strategy.
///
/// The delay after the `n`-th failure (0-indexed) is
/// `initial_delay * multiplier^n`. With the defaults that is 2s, 4s, 8s, ...
/// The final permitted attempt is never followed by a delay.
///
/// # Mathematical Formula
///
/// ```text
/// delay(n) = initial_delay * (multiplier ^ n)   // saturating
/// ```
///
/// # Examples
///
/// ```rust
/// use todofetch_core::retry::{BackoffStrategy, ExponentialBackoff};
/// use std::time::Duration;
///
/// // Defaults: 3 attempts, 2s initial delay, doubling
/// let backoff = ExponentialBackoff::default();
/// assert_eq!(backoff.next_delay(0), Some(Duration::from_secs(2)));
/// assert_eq!(backoff.next_delay(1), Some(Duration::from_secs(4)));
///
/// let fast = ExponentialBackoff::builder()
///     .max_attempts(5)
///     .initial_delay(Duration::from_millis(100))
///     .build();
/// assert_eq!(fast.max_attempts(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExponentialBackoff {
    max_attempts: u32,
    initial_delay: Duration,
    multiplier: u32,
}

impl ExponentialBackoff {
    /// Create a new builder for configuring exponential backoff.
    pub fn builder() -> ExponentialBackoffBuilder {
        ExponentialBackoffBuilder::default()
    }

    /// Delay before the second attempt.
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    /// Factor applied to the delay after every failed attempt.
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }
}

impl Default for ExponentialBackoff {
    /// Defaults:
    /// - `max_attempts`: 3
    /// - `initial_delay`: 2000ms
    /// - `multiplier`: 2 (doubles each time)
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_delay: DEFAULT_INITIAL_DELAY,
            multiplier: DEFAULT_MULTIPLIER,
        }
    }
}

impl BackoffStrategy for ExponentialBackoff {
    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn next_delay(&self, failures: u32) -> Option<Duration> {
        let factor = self.multiplier.saturating_pow(failures);
        Some(self.initial_delay.saturating_mul(factor))
    }
}

/// Builder for configuring `ExponentialBackoff`.
///
/// ```rust
/// use todofetch_core::retry::ExponentialBackoff;
/// use std::time::Duration;
///
/// let backoff = ExponentialBackoff::builder()
///     .max_attempts(4)
///     .initial_delay(Duration::from_millis(500))
///     .multiplier(3)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ExponentialBackoffBuilder {
    max_attempts: Option<u32>,
    initial_delay: Option<Duration>,
    multiplier: Option<u32>,
}

impl ExponentialBackoffBuilder {
    /// Set the maximum number of attempts, the first one included.
    ///
    /// Default: 3. Zero is raised to 1 so the operation always runs.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts.max(1));
        self
    }

    /// Set the delay between the first and second attempts.
    ///
    /// Default: 2000ms
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = Some(delay);
        self
    }

    /// Set the factor the delay grows by after each failure.
    ///
    /// Default: 2
    pub fn multiplier(mut self, multiplier: u32) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    /// Build the `ExponentialBackoff` instance.
    ///
    /// Uses default values for any unset parameters.
    pub fn build(self) -> ExponentialBackoff {
        ExponentialBackoff {
            max_attempts: self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
            initial_delay: self.initial_delay.unwrap_or(DEFAULT_INITIAL_DELAY),
            multiplier: self.multiplier.unwrap_or(DEFAULT_MULTIPLIER),
        }
    }
}
