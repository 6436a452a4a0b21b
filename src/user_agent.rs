//! User-Agent strings for outbound requests.

/// User-Agent sent with page (HTML) fetches.
///
/// Some sites refuse requests without a browser-looking agent. Favicon
/// downloads do not set this header and go out with client defaults.
pub const PAGE_USER_AGENT: &str = "Mozilla/5.0";
