//! Favicon downloading and ranking.
//!
//! Each candidate URL is requested once. Candidates answering `200 OK` become
//! [`FaviconRecord`]s whose resolution is read from the image bytes; every
//! other outcome is dropped without a console line.

mod rank;
mod record;

pub use rank::rank_favicons;
pub use record::{FaviconRecord, Resolution, image_resolution};

use tracing::{debug, trace};

use crate::download::HttpClient;

/// Downloads every candidate in iteration order, keeping the successes.
///
/// Requests run one at a time. Network failures, timeouts, and non-200
/// statuses are skipped; undecodable bodies are kept with zero resolution.
pub async fn download_favicons<I, S>(client: &HttpClient, candidates: I) -> Vec<FaviconRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    for candidate in candidates {
        let url = candidate.as_ref();
        match client.fetch_bytes(url).await {
            Ok(bytes) => {
                let record = FaviconRecord::from_download(url, bytes);
                trace!(url, resolution = %record.resolution(), "favicon downloaded");
                records.push(record);
            }
            Err(error) => {
                trace!(url, %error, "candidate skipped");
            }
        }
    }
    debug!(found = records.len(), "favicon downloads finished");
    records
}
