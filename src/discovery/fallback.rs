//! Conventional favicon locations tried for every site.

use url::Url;

/// Paths historically used for favicons, joined onto the site origin.
pub const FALLBACK_FAVICON_PATHS: [&str; 4] = [
    "/favicon.ico",
    "/favicon.png",
    "/apple-touch-icon.png",
    "/apple-touch-icon-precomposed.png",
];

/// Returns the fallback candidates for `base_url`, independent of page content.
///
/// The paths are absolute, so any path, query, or fragment on the base URL is
/// dropped and only its origin survives.
#[must_use]
pub fn fallback_candidates(base_url: &Url) -> Vec<String> {
    FALLBACK_FAVICON_PATHS
        .iter()
        .filter_map(|path| base_url.join(path).ok())
        .map(String::from)
        .collect()
}
