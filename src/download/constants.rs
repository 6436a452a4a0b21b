//! Constants for the download module (timeouts).

use std::time::Duration;

/// Per-request timeout for page fetches and favicon downloads (5 seconds).
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Per-request timeout as a [`Duration`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(REQUEST_TIMEOUT_SECS);
