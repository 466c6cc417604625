//! The retry loop shared by every backoff strategy.

use super::observer::RetryObserver;
use super::outcome::{Interrupted, RetryOutcome};
use async_trait::async_trait;
use std::error::Error;
use std::future::Future;
use std::time::Duration;

/// A strategy for retrying failed operations with backoff.
///
/// Implementations only decide how many attempts are allowed and how long to
/// wait after each failure. The loop itself lives in the provided
/// [`execute_until`](BackoffStrategy::execute_until) method so that every
/// strategy counts attempts, sleeps, and reacts to interruption the same way.
///
/// The loop never looks at the error value: a transport failure, a bad
/// status code and a malformed payload are all retried alike.
///
/// # Examples
///
/// ```rust
/// use todofetch_core::retry::{BackoffStrategy, ExponentialBackoff};
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backoff = ExponentialBackoff::builder()
///     .max_attempts(3)
///     .initial_delay(Duration::from_millis(10))
///     .build();
///
/// let calls = Arc::new(AtomicU32::new(0));
/// let outcome = backoff.execute(|| {
///     let calls = Arc::clone(&calls);
///     async move {
///         if calls.fetch_add(1, Ordering::SeqCst) < 2 {
///             Err(std::io::Error::other("retry me"))
///         } else {
///             Ok(42)
///         }
///     }
/// }).await?;
///
/// assert_eq!(outcome.into_value(), Some(42));
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait BackoffStrategy: Send + Sync {
    /// Maximum number of times the operation is invoked, including the first.
    ///
    /// A value of 0 is treated as 1 by the retry loop.
    fn max_attempts(&self) -> u32;

    /// Delay to wait after the `failures`-th failed attempt (0-indexed).
    ///
    /// `next_delay(0)` is the wait between the first and the second attempt.
    /// Returning `None` retries immediately.
    fn next_delay(&self, failures: u32) -> Option<Duration>;

    /// Execute an operation with retries and no interruption source.
    ///
    /// # Returns
    /// - `Ok(RetryOutcome::Succeeded { .. })`: the first successful value
    /// - `Ok(RetryOutcome::Exhausted { .. })`: every attempt failed
    ///
    /// Without an interruption source this never returns `Err`.
    async fn execute<F, Fut, T, E>(&self, operation: F) -> Result<RetryOutcome<T, E>, Interrupted>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, E>> + Send,
        T: Send,
        E: Error + Send + Sync + 'static,
    {
        self.execute_until(operation, std::future::pending::<()>(), &())
            .await
    }

    /// Execute an operation with retries, reporting to `observer` and giving
    /// up as soon as `interrupt` completes during a backoff wait.
    ///
    /// `interrupt` is only polled while sleeping between attempts; an
    /// operation that is already running is allowed to finish.
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`] if `interrupt` resolves before a backoff sleep
    /// ends. No further attempts are made in that case, whatever the
    /// remaining budget.
    async fn execute_until<F, Fut, T, E, I, O>(
        &self,
        operation: F,
        interrupt: I,
        observer: &O,
    ) -> Result<RetryOutcome<T, E>, Interrupted>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, E>> + Send,
        T: Send,
        E: Error + Send + Sync + 'static,
        I: Future<Output = ()> + Send,
        O: RetryObserver + ?Sized,
    {
        let max_attempts = self.max_attempts().max(1);
        tokio::pin!(interrupt);

        let mut attempt = 0;
        loop {
            attempt += 1;
            observer.on_attempt(attempt, max_attempts);

            let err = match operation().await {
                Ok(value) => {
                    return Ok(RetryOutcome::Succeeded {
                        value,
                        attempts: attempt,
                    });
                }
                Err(err) => err,
            };
            observer.on_failure(attempt, &err);

            if attempt >= max_attempts {
                return Ok(RetryOutcome::Exhausted {
                    attempts: attempt,
                    last_error: err,
                });
            }

            if let Some(delay) = self.next_delay(attempt - 1) {
                observer.on_backoff(attempt, delay);
                tokio::select! {
                    biased;
                    _ = &mut interrupt => return Err(Interrupted { attempts: attempt }),
                    _ = tokio::time::sleep(delay) => {}
                }
            }
        }
    }
}
