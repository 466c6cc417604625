#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core retry machinery for todofetch.
//!
//! A generic executor that re-invokes a fallible async operation a bounded
//! number of times, sleeping an exponentially growing delay between failed
//! attempts.
//!
//! - **Backoff strategies** via the `BackoffStrategy` trait
//!   - `ExponentialBackoff`: 2s, 4s, 8s, ... by default
//! - **Observation hooks** via `RetryObserver` (attempt, failure, backoff)
//! - **Explicit outcomes**: success, exhaustion (carrying the last cause),
//!   or `Interrupted` when the backoff wait is cancelled
//!
//! # Examples
//!
//! ```rust
//! use todofetch_core::prelude::*;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Interrupted> {
//! let backoff = ExponentialBackoff::builder()
//!     .max_attempts(3)
//!     .initial_delay(Duration::from_millis(10))
//!     .build();
//!
//! let outcome = backoff
//!     .execute(|| async { Ok::<_, std::io::Error>(42) })
//!     .await?;
//!
//! assert_eq!(outcome.into_value(), Some(42));
//! # Ok(())
//! # }
//! ```

pub mod retry;

/// Convenient re-exports of commonly used items.
///
/// ```rust
/// use todofetch_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::retry::{
        BackoffStrategy, ExponentialBackoff, ExponentialBackoffBuilder, Interrupted,
        RetryObserver, RetryOutcome,
    };

    #[cfg(feature = "tracing")]
    pub use crate::retry::TracingObserver;
}
