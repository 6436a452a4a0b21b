//! Favicon candidate discovery.
//!
//! A site's candidate set is the union of image URLs found in its markup and
//! four conventional fallback locations. The fallbacks are always present,
//! so every site with a parseable URL has at least four candidates to try.
//!
//! # Example
//!
//! ```
//! use favicon_core::discovery::candidate_set;
//! use url::Url;
//!
//! let base = Url::parse("https://example.com").unwrap();
//! let html = r#"<link rel="icon" href="/static/icon-192.png">"#;
//! let candidates = candidate_set(Some(html), &base);
//! assert_eq!(candidates.len(), 5);
//! assert!(candidates.contains("https://example.com/favicon.ico"));
//! assert!(candidates.contains("https://example.com/static/icon-192.png"));
//! ```

mod fallback;
mod links;

pub use fallback::{FALLBACK_FAVICON_PATHS, fallback_candidates};
pub use links::{IMAGE_EXTENSIONS, extract_favicon_links, has_image_extension};

use std::collections::BTreeSet;

use url::Url;

/// Builds the deduplicated candidate set for one site.
///
/// `html` is `None` when the page fetch failed; the fallback paths are added
/// either way.
#[must_use]
pub fn candidate_set(html: Option<&str>, base_url: &Url) -> BTreeSet<String> {
    let mut candidates = html
        .map(|markup| extract_favicon_links(markup, base_url))
        .unwrap_or_default();
    candidates.extend(fallback_candidates(base_url));
    candidates
}
