//! Favicon candidate extraction from page markup.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};
use url::Url;

/// Image extensions recognized for candidate matching and output naming.
pub const IMAGE_EXTENSIONS: [&str; 5] = [".ico", ".png", ".jpg", ".jpeg", ".webp"];

#[allow(clippy::expect_used)]
static LINK_META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("link, meta").expect("link/meta selector is valid"));

#[allow(clippy::expect_used)]
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img[src]").expect("img selector is valid"));

/// Returns true if `value` mentions a recognized image extension.
///
/// This is a case-insensitive *substring* test, not a suffix test:
/// `/icon.jpg?x=png` and `/foo.pngx` both match, `icon.svg` does not.
#[must_use]
pub fn has_image_extension(value: &str) -> bool {
    let lowered = value.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lowered.contains(ext))
}

/// Scans markup for favicon candidates and resolves them against `base_url`.
///
/// Candidates come from:
/// 1. every `link` and `meta` element's `href` (or, when absent or empty,
///    `content`) attribute;
/// 2. every `img` element's `src` attribute, anywhere in the document.
///
/// Only values passing [`has_image_extension`] are kept. Values that cannot
/// be joined onto the base URL are skipped.
#[must_use]
pub fn extract_favicon_links(html: &str, base_url: &Url) -> BTreeSet<String> {
    let document = Html::parse_document(html);
    let mut favicons = BTreeSet::new();

    for element in document.select(&LINK_META_SELECTOR) {
        if let Some(reference) = link_or_meta_reference(element) {
            add_candidate(&mut favicons, base_url, reference);
        }
    }

    // Not restricted to <head>/<header>: any image tag qualifies.
    for element in document.select(&IMG_SELECTOR) {
        if let Some(src) = element.value().attr("src") {
            add_candidate(&mut favicons, base_url, src);
        }
    }

    debug!(count = favicons.len(), "extracted favicon links from markup");
    favicons
}

fn link_or_meta_reference(element: ElementRef<'_>) -> Option<&str> {
    let attrs = element.value();
    attrs
        .attr("href")
        .filter(|href| !href.is_empty())
        .or_else(|| attrs.attr("content"))
        .filter(|value| !value.is_empty())
}

fn add_candidate(favicons: &mut BTreeSet<String>, base_url: &Url, reference: &str) {
    if !has_image_extension(reference) {
        return;
    }
    match base_url.join(reference) {
        Ok(resolved) => {
            trace!(reference, resolved = %resolved, "candidate found in markup");
            favicons.insert(resolved.to_string());
        }
        Err(error) => {
            debug!(reference, %error, "skipping unresolvable candidate");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/blog/post").unwrap()
    }

    #[test]
    fn test_has_image_extension_case_insensitive() {
        assert!(has_image_extension("ICON.PNG?v=2"));
        assert!(has_image_extension("/favicon.Ico"));
        assert!(has_image_extension("photo.JPEG"));
        assert!(has_image_extension("/img/logo.webp"));
    }

    #[test]
    fn test_has_image_extension_is_substring_not_suffix() {
        assert!(has_image_extension("/foo.pngx"));
        assert!(has_image_extension("/icon.jpg?x=png"));
        assert!(has_image_extension("/assets.png/manifest.json"));
    }

    #[test]
    fn test_has_image_extension_rejects_others() {
        assert!(!has_image_extension("icon.svg"));
        assert!(!has_image_extension("/site.webmanifest"));
        assert!(!has_image_extension("width=device-width"));
        assert!(!has_image_extension("/png/icon"));
    }

    #[test]
    fn test_extract_links_resolves_relative_and_absolute() {
        let html = r#"<html><head>
            <link rel="icon" href="/favicon-32.png">
            <link rel="apple-touch-icon" href="touch.png">
            <link rel="icon" href="https://cdn.example.net/icon.ICO">
            <link rel="stylesheet" href="/main.css">
        </head><body></body></html>"#;
        let links = extract_favicon_links(html, &base());
        let expected: BTreeSet<String> = [
            "https://example.com/favicon-32.png",
            "https://example.com/blog/touch.png",
            "https://cdn.example.net/icon.ICO",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(links, expected);
    }

    #[test]
    fn test_extract_links_reads_meta_content() {
        let html = r#"<head>
            <meta property="og:image" content="/social/card.jpg">
            <meta name="viewport" content="width=device-width">
            <meta name="msapplication-TileImage" content="/mstile-144.png">
        </head>"#;
        let links = extract_favicon_links(html, &base());
        assert!(links.contains("https://example.com/social/card.jpg"));
        assert!(links.contains("https://example.com/mstile-144.png"));
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_extract_links_empty_href_falls_back_to_content() {
        let html = r#"<link href="" content="/from-content.png">"#;
        let links = extract_favicon_links(html, &base());
        assert!(links.contains("https://example.com/from-content.png"));
    }

    #[test]
    fn test_extract_links_scans_img_anywhere_in_document() {
        let html = r#"<html><head></head><body>
            <header><img src="/logo.png"></header>
            <main><article><img src="/photos/cat.JPG"><img src="/diagram.svg"></article></main>
            <footer><img alt="no src"></footer>
        </body></html>"#;
        let links = extract_favicon_links(html, &base());
        assert!(links.contains("https://example.com/logo.png"));
        assert!(links.contains("https://example.com/photos/cat.JPG"));
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_extract_links_deduplicates_after_join() {
        let html = r#"<link rel="icon" href="/favicon.png">
            <link rel="shortcut icon" href="https://example.com/favicon.png">
            <img src="../favicon.png">"#;
        let links = extract_favicon_links(html, &base());
        assert_eq!(links.len(), 1);
        assert!(links.contains("https://example.com/favicon.png"));
    }

    #[test]
    fn test_extract_links_no_markup_matches() {
        let links = extract_favicon_links("<p>hello</p>", &base());
        assert!(links.is_empty());
    }
}
