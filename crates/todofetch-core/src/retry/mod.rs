//! Retry strategies and backoff implementations.
//!
//! # Key Types
//!
//! - [`BackoffStrategy`] - Core trait; owns the retry loop
//! - [`ExponentialBackoff`] - Doubling delay starting at 2 seconds
//! - [`RetryObserver`] - Hooks for progress reporting
//! - [`RetryOutcome`] - Success value or the exhausted sentinel
//! - [`Interrupted`] - Fatal cancellation during a backoff wait
//!
//! # Examples
//!
//! ```rust
//! use todofetch_core::retry::{BackoffStrategy, ExponentialBackoff};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backoff = ExponentialBackoff::builder()
//!     .max_attempts(3)
//!     .initial_delay(Duration::from_millis(100))
//!     .build();
//!
//! let outcome = backoff.execute(|| async {
//!     // Your operation here
//!     Ok::<_, std::io::Error>(42)
//! }).await?;
//!
//! assert!(outcome.is_success());
//! # Ok(())
//! # }
//! ```

mod exponential;
mod observer;
mod outcome;
mod strategy;

pub use exponential::{ExponentialBackoff, ExponentialBackoffBuilder};
#[cfg(feature = "tracing")]
pub use observer::TracingObserver;
pub use observer::RetryObserver;
pub use outcome::{Interrupted, RetryOutcome};
pub use strategy::BackoffStrategy;
