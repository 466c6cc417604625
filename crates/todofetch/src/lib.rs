//! # todofetch
//!
//! Fetches the todo collection from a JSONPlaceholder-style API:
//! - One GET per attempt with a 20 second request timeout
//! - Every failure retried with exponential backoff (2s, 4s, ...)
//! - Cancellation of the backoff wait reported as a fatal `Interrupted`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use todofetch::{Client, ConsoleObserver, InterruptSignal, RetryOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new()?;
//!     let interrupt = InterruptSignal::listen(tokio::signal::ctrl_c());
//!
//!     let result = client
//!         .todos()
//!         .list_with_retry(interrupt.raised(), &ConsoleObserver::new())
//!         .await;
//!
//!     match interrupt.settle(result)? {
//!         RetryOutcome::Succeeded { value, .. } => println!("{} todos", value.len()),
//!         RetryOutcome::Exhausted { last_error, .. } => eprintln!("gave up: {last_error}"),
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use observability::ConsoleObserver;
pub use resources::Todos;
pub use signal::InterruptSignal;
pub use todofetch_core::retry::{
    BackoffStrategy, ExponentialBackoff, Interrupted, RetryObserver, RetryOutcome,
};
pub use todofetch_transport::{HttpRequest, HttpResponse, Transport, TransportError};
pub use types::Todo;

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod preview;
pub mod report;
pub mod resources;
pub mod signal;
pub mod types;

// Re-export key dependencies for convenience
pub use async_trait::async_trait;
