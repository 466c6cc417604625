//! Console progress reporting for retried fetches
//!
//! `ConsoleObserver` prints the user-facing progress lines and forwards every
//! event to `TracingObserver` so the same run is also visible in the logs.

use std::error::Error;
use std::io::{self, Stderr, Stdout, Write};
use std::sync::Mutex;
use std::time::Duration;

use todofetch_core::retry::{RetryObserver, TracingObserver};

/// Prints `Attempt <n> of <max>...` before each attempt and
/// `Attempt failed: <cause>` after each failure.
///
/// Progress lines go to `out`, failures to `err`. Write errors are ignored.
#[derive(Debug)]
pub struct ConsoleObserver<W = Stdout, E = Stderr> {
    out: Mutex<W>,
    err: Mutex<E>,
    tracing: TracingObserver,
}

impl ConsoleObserver {
    /// Observer writing to the process's stdout and stderr.
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write, E: Write> ConsoleObserver<W, E> {
    /// Observer writing to the given sinks.
    pub fn with_writers(out: W, err: E) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
            tracing: TracingObserver,
        }
    }

    /// Give back the sinks.
    pub fn into_writers(self) -> (W, E) {
        let out = self.out.into_inner().unwrap_or_else(|e| e.into_inner());
        let err = self.err.into_inner().unwrap_or_else(|e| e.into_inner());
        (out, err)
    }
}

impl<W: Write + Send, E: Write + Send> RetryObserver for ConsoleObserver<W, E> {
    fn on_attempt(&self, attempt: u32, max_attempts: u32) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "Attempt {attempt} of {max_attempts}...");
        }
        self.tracing.on_attempt(attempt, max_attempts);
    }

    fn on_failure(&self, attempt: u32, error: &(dyn Error + 'static)) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "Attempt failed: {error}");
        }
        self.tracing.on_failure(attempt, error);
    }

    fn on_backoff(&self, attempt: u32, delay: Duration) {
        self.tracing.on_backoff(attempt, delay);
    }
}
