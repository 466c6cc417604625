//! HTTP transport layer for todofetch
//!
//! Sends exactly one request per call and hands back the raw response.
//! Retrying is left to the caller.
//!
//! # Architecture
//!
//! - **Transport trait**: the seam the client talks through, so tests can
//!   swap in a scripted transport
//! - **HTTP transport**: reqwest client with request and connect timeouts
//! - **Error handling**: connection, timeout and other HTTP failures kept apart

#![deny(unsafe_code)]
#![warn(missing_docs)]
//!
//! # Usage
//!
//! ```no_run
//! use todofetch_transport::{HttpRequest, HttpTransport, Transport};
//!
//! # async fn example() -> todofetch_transport::Result<()> {
//! let transport = HttpTransport::new()?;
//! let request = HttpRequest::get("https://jsonplaceholder.typicode.com/todos");
//! let response = transport.send(request).await?;
//! println!("status {}", response.status);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, TransportError};
pub use http::{HttpTransport, HttpTransportConfig};
pub use traits::{HttpRequest, HttpResponse, Transport};
