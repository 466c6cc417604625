//! Fetch the todo collection with retries and print the first few entries.
//!
//! ```bash
//! cargo run -p todofetch
//! ```
//!
//! Exits with status 0 when retries run out or the run is interrupted with
//! Ctrl-C; only a client that cannot be built is an error exit.

use std::io;
use std::process::ExitCode;

use todofetch::report::write_report;
use todofetch::{Client, ConsoleObserver, InterruptSignal};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(io::stderr)
        .init();

    println!("Starting todofetch with retry mechanism...");

    let client = Client::new()?;
    let observer = ConsoleObserver::new();
    // Installed here so Ctrl-C during the first attempt is not the default SIGINT.
    let interrupt = InterruptSignal::listen(tokio::signal::ctrl_c());

    let result = client
        .todos()
        .list_with_retry(interrupt.raised(), &observer)
        .await;
    let result = interrupt.settle(result);

    let status = write_report(&mut io::stdout().lock(), &mut io::stderr().lock(), &result)?;
    Ok(ExitCode::from(status))
}
