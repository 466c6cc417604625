//! Interruption of a fetch run from an outside signal
//!
//! `InterruptSignal` latches the first firing of a signal source such as
//! `tokio::signal::ctrl_c()` into a `CancellationToken`. The source is polled
//! once on construction, so its handler is installed before the first attempt
//! runs rather than at the first backoff wait.

use std::future::Future;
use std::io;
use std::task::{Context, Poll, Waker};

use todofetch_core::retry::{Interrupted, RetryOutcome};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::Result;

/// Latched interruption request for one fetch run.
///
/// # Example
///
/// ```rust,no_run
/// use todofetch::{Client, InterruptSignal};
///
/// # async fn example() -> todofetch::Result<()> {
/// let client = Client::new()?;
/// let interrupt = InterruptSignal::listen(tokio::signal::ctrl_c());
///
/// let result = client.todos().list_with_retry(interrupt.raised(), &()).await;
/// let outcome = interrupt.settle(result)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct InterruptSignal {
    token: CancellationToken,
}

impl InterruptSignal {
    /// Start listening to `signal`.
    ///
    /// Must be called inside a tokio runtime. If `signal` resolves to an
    /// error, typically because no handler could be installed, the failure
    /// is logged and the run can no longer be interrupted.
    pub fn listen<S>(signal: S) -> Self
    where
        S: Future<Output = io::Result<()>> + Send + 'static,
    {
        let token = CancellationToken::new();
        let mut signal = Box::pin(signal);

        // The first poll is what installs the handler.
        let mut cx = Context::from_waker(Waker::noop());
        match signal.as_mut().poll(&mut cx) {
            Poll::Ready(result) => latch(&token, result),
            Poll::Pending => {
                let task_token = token.clone();
                tokio::spawn(async move { latch(&task_token, signal.await) });
            }
        }

        Self { token }
    }

    /// Whether the signal has fired.
    pub fn is_raised(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Future that completes once the signal fires, and never otherwise.
    pub fn raised(&self) -> impl Future<Output = ()> + Send + 'static {
        self.token.clone().cancelled_owned()
    }

    /// Turn a finished run into [`Error::Interrupted`] if the signal fired
    /// while it was going.
    ///
    /// The retry loop only notices the signal while waiting between
    /// attempts. A signal that lands during an attempt, the last one
    /// included, is picked up here instead.
    ///
    /// [`Error::Interrupted`]: crate::Error::Interrupted
    pub fn settle<T, E>(&self, result: Result<RetryOutcome<T, E>>) -> Result<RetryOutcome<T, E>> {
        match result {
            Ok(outcome) if self.is_raised() => Err(Interrupted {
                attempts: outcome.attempts(),
            }
            .into()),
            other => other,
        }
    }
}

fn latch(token: &CancellationToken, result: io::Result<()>) {
    match result {
        Ok(()) => {
            debug!("Interrupt signal received");
            token.cancel();
        }
        Err(err) => warn!(error = %err, "Could not listen for interrupts"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::future::pending;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_handler_installed_before_any_await() {
        let installed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&installed);

        let signal = InterruptSignal::listen(async move {
            flag.store(true, Ordering::SeqCst);
            pending::<io::Result<()>>().await
        });

        assert!(installed.load(Ordering::SeqCst));
        assert!(!signal.is_raised());
    }

    #[tokio::test]
    async fn test_ready_signal_is_raised_immediately() {
        let signal = InterruptSignal::listen(async { Ok(()) });

        assert!(signal.is_raised());
        signal.raised().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_signal_latches_from_background_task() {
        let signal = InterruptSignal::listen(async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(())
        });
        assert!(!signal.is_raised());

        signal.raised().await;
        assert!(signal.is_raised());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_handler_never_raises() {
        let signal = InterruptSignal::listen(async { Err(io::Error::other("no handler")) });

        let waited = tokio::time::timeout(Duration::from_secs(60), signal.raised()).await;
        assert!(waited.is_err());
        assert!(!signal.is_raised());
    }

    #[tokio::test]
    async fn test_settle_marks_finished_run_interrupted() {
        let signal = InterruptSignal::listen(async { Ok(()) });
        let exhausted: Result<RetryOutcome<(), Error>> = Ok(RetryOutcome::Exhausted {
            attempts: 3,
            last_error: Error::HttpStatus { code: 500 },
        });

        let err = signal.settle(exhausted).unwrap_err();
        assert!(matches!(err, Error::Interrupted(Interrupted { attempts: 3 })));
    }

    #[tokio::test]
    async fn test_settle_passes_through_when_quiet() {
        let signal = InterruptSignal::listen(pending::<io::Result<()>>());
        let done: Result<RetryOutcome<u8, Error>> = Ok(RetryOutcome::Succeeded {
            value: 7,
            attempts: 1,
        });

        let outcome = signal.settle(done).unwrap();
        assert_eq!(outcome.into_value(), Some(7));
    }
}
