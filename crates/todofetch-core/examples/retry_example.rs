//! Example: retrying a flaky operation with `ExponentialBackoff`
//!
//! This example demonstrates:
//! 1. Recovery after transient failures
//! 2. Exhaustion, with the last failure kept for reporting
//! 3. Cancelling the backoff wait with Ctrl-C
//!
//! Run with:
//! ```bash
//! cargo run -p todofetch-core --example retry_example
//! ```

use std::error::Error;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};
use todofetch_core::prelude::*;

/// A simulated API that fails the first few times
struct UnreliableApi {
    calls: AtomicU32,
    fail_count: u32,
}

impl UnreliableApi {
    fn new(fail_count: u32) -> Self {
        Self {
            calls: AtomicU32::new(0),
            fail_count,
        }
    }

    async fn call(&self) -> Result<String, std::io::Error> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.fail_count {
            Err(std::io::Error::other(format!("transient error on call {call}")))
        } else {
            Ok("API response data".to_string())
        }
    }
}

/// Prints each event as it happens
struct PrintObserver;

impl RetryObserver for PrintObserver {
    fn on_attempt(&self, attempt: u32, max_attempts: u32) {
        println!("  Attempt {attempt} of {max_attempts}...");
    }

    fn on_failure(&self, _attempt: u32, error: &(dyn Error + 'static)) {
        println!("  Attempt failed: {error}");
    }

    fn on_backoff(&self, _attempt: u32, delay: Duration) {
        println!("  Waiting {delay:?}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let backoff = ExponentialBackoff::builder()
        .max_attempts(3)
        .initial_delay(Duration::from_millis(200))
        .build();

    println!("1. Two failures, then success:");
    let api = UnreliableApi::new(2);
    let started = Instant::now();
    let outcome = backoff
        .execute_until(|| api.call(), std::future::pending::<()>(), &PrintObserver)
        .await?;
    let attempts = outcome.attempts();
    println!(
        "  -> {:?} after {} attempts in {:?}\n",
        outcome.into_value(),
        attempts,
        started.elapsed()
    );

    println!("2. Failing every time:");
    let api = UnreliableApi::new(u32::MAX);
    let outcome = backoff
        .execute_until(|| api.call(), std::future::pending::<()>(), &PrintObserver)
        .await?;
    if let RetryOutcome::Exhausted { last_error, .. } = &outcome {
        println!("  -> gave up, last error: {last_error}\n");
    }

    println!("3. Press Ctrl-C during a wait to interrupt:");
    let slow = ExponentialBackoff::builder()
        .max_attempts(5)
        .initial_delay(Duration::from_secs(3))
        .build();
    let api = UnreliableApi::new(u32::MAX);
    let interrupt = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    match slow.execute_until(|| api.call(), interrupt, &PrintObserver).await {
        Ok(outcome) => println!("  -> finished after {} attempts", outcome.attempts()),
        Err(interrupted) => println!("  -> {interrupted}"),
    }

    Ok(())
}
