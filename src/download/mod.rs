//! HTTP layer for page fetches and favicon downloads.
//!
//! # Features
//!
//! - One GET per URL, never retried
//! - Fixed 5 second timeout per request
//! - `User-Agent: Mozilla/5.0` on page fetches, client defaults on downloads
//! - Structured error types carrying the failing URL
//!
//! # Example
//!
//! ```no_run
//! use favicon_core::download::HttpClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new();
//! let bytes = client.fetch_bytes("https://example.com/favicon.ico").await?;
//! println!("Downloaded {} bytes", bytes.len());
//! # Ok(())
//! # }
//! ```

mod client;
pub mod constants;
mod error;

pub use client::HttpClient;
pub use constants::{REQUEST_TIMEOUT, REQUEST_TIMEOUT_SECS};
pub use error::FetchError;
