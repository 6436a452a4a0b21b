//! Console lines printed for each processed site.

use favicon_core::{FetchError, SavedFavicon, SiteOutcome, SiteReport, StorageError};

/// Final line printed after the last site.
pub const COMPLETED_MESSAGE: &str = "Favicon fetching completed.";

pub(crate) fn fetch_error_line(url: &str, error: &FetchError) -> String {
    format!("Error fetching {url}: {error}")
}

pub(crate) fn no_favicons_line(url: &str) -> String {
    format!("No favicons found for {url}")
}

pub(crate) fn saved_line(saved: &SavedFavicon) -> String {
    format!("Saved: {} -> {}", saved.url, saved.path.display())
}

pub(crate) fn storage_error_line(url: &str, error: &StorageError) -> String {
    format!("Error saving favicons for {url}: {error}")
}

/// Lines printed once a site is finished.
///
/// The page fetch error is not repeated here; it is printed when it happens.
pub(crate) fn site_report_lines(report: &SiteReport) -> Vec<String> {
    let url = report.target.url.as_str();
    match &report.outcome {
        SiteOutcome::Saved(saved) => saved.iter().map(saved_line).collect(),
        SiteOutcome::NoFavicons => vec![no_favicons_line(url)],
        SiteOutcome::StorageFailed { saved, error } => saved
            .iter()
            .map(saved_line)
            .chain(std::iter::once(storage_error_line(url, error)))
            .collect(),
    }
}
