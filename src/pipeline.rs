//! Per-site favicon pipeline and the sequential batch driver.
//!
//! For each target: fetch the page, collect candidates from markup and the
//! fallback paths, download every candidate, rank by resolution, and save.
//! Sites are processed strictly one after another; nothing that happens to
//! one site changes how the next one is handled.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use favicon_core::download::HttpClient;
//! use favicon_core::parser::parse_targets;
//! use favicon_core::pipeline::{SiteEvent, run_batch};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new();
//! let targets = parse_targets("example.com\nrust-lang.org\n");
//! let stats = run_batch(&client, &targets, Path::new("favicons"), |event| match event {
//!     SiteEvent::PageFetchFailed { target, error } => eprintln!("{target}: {error}"),
//!     SiteEvent::Finished(report) => println!("{}: {} saved", report.target, report.saved().len()),
//! })
//! .await?;
//! println!("{} files saved", stats.files_saved);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::discovery::candidate_set;
use crate::download::{FetchError, HttpClient};
use crate::favicon::{download_favicons, rank_favicons};
use crate::parser::Target;
use crate::storage::{PartialSave, SavedFavicon, StorageError, domain_dir_name, save_favicons};

/// What happened to a site's favicons.
#[derive(Debug)]
pub enum SiteOutcome {
    /// At least one favicon was written, in rank order.
    Saved(Vec<SavedFavicon>),
    /// No candidate answered `200 OK`; nothing was written.
    NoFavicons,
    /// Writing stopped at `error`; `saved` lists the files written before it.
    StorageFailed {
        /// Files on disk, in rank order.
        saved: Vec<SavedFavicon>,
        /// The write that failed.
        error: StorageError,
    },
}

/// Progress notifications from [`run_batch`], in the order they happen.
#[derive(Debug, Clone, Copy)]
pub enum SiteEvent<'a> {
    /// The page fetch failed. Sent before the site's candidates are downloaded.
    PageFetchFailed {
        /// The site being processed.
        target: &'a Target,
        /// Why the page could not be fetched.
        error: &'a FetchError,
    },
    /// The site is done.
    Finished(&'a SiteReport),
}

/// Result of processing one site.
#[derive(Debug)]
pub struct SiteReport {
    /// The site that was processed.
    pub target: Target,
    /// Page fetch failure, if any. The site still tries its fallback paths.
    pub page_error: Option<FetchError>,
    /// Download and save outcome.
    pub outcome: SiteOutcome,
}

impl SiteReport {
    /// Files written for this site, including those written before a
    /// storage failure.
    #[must_use]
    pub fn saved(&self) -> &[SavedFavicon] {
        match &self.outcome {
            SiteOutcome::Saved(saved) | SiteOutcome::StorageFailed { saved, .. } => saved,
            SiteOutcome::NoFavicons => &[],
        }
    }
}

/// Aggregate counts for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Sites processed.
    pub sites: usize,
    /// Sites whose favicons were all saved.
    pub sites_with_favicons: usize,
    /// Sites where no candidate answered `200 OK`.
    pub sites_without_favicons: usize,
    /// Sites whose page fetch failed.
    pub page_fetch_failures: usize,
    /// Sites whose favicons could not be written.
    pub storage_failures: usize,
    /// Total files written.
    pub files_saved: usize,
}

impl BatchStats {
    /// Folds one site report into the totals.
    pub fn record(&mut self, report: &SiteReport) {
        self.sites += 1;
        if report.page_error.is_some() {
            self.page_fetch_failures += 1;
        }
        match &report.outcome {
            SiteOutcome::Saved(saved) => {
                self.sites_with_favicons += 1;
                self.files_saved += saved.len();
            }
            SiteOutcome::NoFavicons => self.sites_without_favicons += 1,
            SiteOutcome::StorageFailed { saved, .. } => {
                self.storage_failures += 1;
                self.files_saved += saved.len();
            }
        }
    }
}

/// Processes a single site end to end.
///
/// Never fails: page fetch errors are recorded in the report, favicon fetch
/// errors are dropped, and write errors become [`SiteOutcome::StorageFailed`].
pub async fn process_site(client: &HttpClient, target: &Target, output_root: &Path) -> SiteReport {
    process_site_with(client, target, output_root, |_| {}).await
}

/// Like [`process_site`], but calls `on_page_error` as soon as the page
/// fetch fails, before any candidate is downloaded.
#[instrument(skip_all, fields(url = %target.url))]
pub async fn process_site_with<F>(
    client: &HttpClient,
    target: &Target,
    output_root: &Path,
    on_page_error: F,
) -> SiteReport
where
    F: FnOnce(&FetchError),
{
    let (html, page_error) = match client.fetch_html(&target.url).await {
        Ok(html) => (Some(html), None),
        Err(error) => {
            debug!(%error, "page fetch failed; trying fallback paths only");
            on_page_error(&error);
            (None, Some(error))
        }
    };

    let base_url = Url::parse(&target.url).ok();
    let candidates = base_url
        .as_ref()
        .map(|base| candidate_set(html.as_deref(), base))
        .unwrap_or_default();
    debug!(candidates = candidates.len(), "candidate set built");

    let records = rank_favicons(download_favicons(client, &candidates).await);
    let domain_dir = base_url
        .as_ref()
        .and_then(domain_dir_name)
        .map(|domain| output_root.join(domain));

    let outcome = match domain_dir {
        Some(dir) if !records.is_empty() => match save_favicons(&records, &dir).await {
            Ok(saved) => SiteOutcome::Saved(saved),
            Err(PartialSave { saved, error }) => {
                warn!(%error, written = saved.len(), "failed to save favicons");
                SiteOutcome::StorageFailed { saved, error }
            }
        },
        _ => SiteOutcome::NoFavicons,
    };

    SiteReport {
        target: target.clone(),
        page_error,
        outcome,
    }
}

/// Processes every target in order, reporting each step to `on_event`.
///
/// The output root is created up front.
///
/// # Errors
///
/// Returns [`StorageError::Io`] only if the output root cannot be created.
/// Per-site failures are reported through `on_event` and never abort the batch.
#[instrument(skip_all, fields(sites = targets.len(), output_root = %output_root.display()))]
pub async fn run_batch<F>(
    client: &HttpClient,
    targets: &[Target],
    output_root: &Path,
    mut on_event: F,
) -> Result<BatchStats, StorageError>
where
    F: FnMut(SiteEvent<'_>),
{
    tokio::fs::create_dir_all(output_root)
        .await
        .map_err(|e| StorageError::io(output_root, e))?;

    let mut stats = BatchStats::default();
    for target in targets {
        let report = process_site_with(client, target, output_root, |error| {
            on_event(SiteEvent::PageFetchFailed { target, error });
        })
        .await;
        stats.record(&report);
        on_event(SiteEvent::Finished(&report));
    }

    info!(
        sites = stats.sites,
        with_favicons = stats.sites_with_favicons,
        without_favicons = stats.sites_without_favicons,
        files = stats.files_saved,
        "batch complete"
    );
    Ok(stats)
}
