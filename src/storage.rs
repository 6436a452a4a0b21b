//! Persistence of ranked favicons to per-domain folders.
//!
//! Layout: `{output_root}/{domain}/{rank}_{width}x{height}{ext}`, with rank
//! starting at 1. Files with the same computed name are overwritten, so a
//! re-run against an unchanged site rewrites the same files.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crate::discovery::IMAGE_EXTENSIONS;
use crate::favicon::{FaviconRecord, Resolution};

/// Extension used when the source URL has no recognized image extension.
pub const DEFAULT_EXTENSION: &str = ".png";

/// Errors that can occur while writing favicons to disk.
#[derive(Debug, Error)]
pub enum StorageError {
    /// File system error (create directory, write file).
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// A write failure partway through a site.
///
/// Files written before the failure stay on disk and are listed in `saved`.
#[derive(Debug)]
pub struct PartialSave {
    /// Files written before `error`, in rank order.
    pub saved: Vec<SavedFavicon>,
    /// The write that failed.
    pub error: StorageError,
}

/// A favicon written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFavicon {
    /// 1-based rank.
    pub rank: usize,
    /// Source URL.
    pub url: String,
    /// Written file.
    pub path: PathBuf,
    /// Decoded resolution.
    pub resolution: Resolution,
}

/// Returns the folder name for a site: its network location without a
/// leading `www.`.
///
/// A non-default port is kept (`127.0.0.1:8080`). Returns `None` for URLs
/// without a host.
#[must_use]
pub fn domain_dir_name(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// Picks the output extension from the candidate URL's path.
///
/// The query and fragment are ignored. Unrecognized or missing extensions
/// fall back to [`DEFAULT_EXTENSION`].
#[must_use]
pub fn file_extension(url: &str) -> &'static str {
    let Ok(parsed) = Url::parse(url) else {
        return DEFAULT_EXTENSION;
    };
    let last_segment = parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");
    let Some(dot_index) = last_segment.rfind('.') else {
        return DEFAULT_EXTENSION;
    };
    let extension = last_segment[dot_index..].to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .find(|known| **known == extension)
        .copied()
        .unwrap_or(DEFAULT_EXTENSION)
}

/// Builds `{rank}_{width}x{height}{ext}`.
#[must_use]
pub fn output_file_name(rank: usize, resolution: Resolution, extension: &str) -> String {
    format!("{rank}_{resolution}{extension}")
}

/// Writes ranked records into `domain_dir`, creating it if needed.
///
/// `records` must already be in rank order; the first record gets rank 1.
///
/// # Errors
///
/// Returns a [`PartialSave`] if the directory cannot be created or a file
/// cannot be written. Writing stops at the first failure.
#[instrument(skip(records), fields(dir = %domain_dir.display(), count = records.len()))]
pub async fn save_favicons(
    records: &[FaviconRecord],
    domain_dir: &Path,
) -> Result<Vec<SavedFavicon>, PartialSave> {
    let mut saved = Vec::with_capacity(records.len());
    if let Err(e) = tokio::fs::create_dir_all(domain_dir).await {
        return Err(PartialSave {
            saved,
            error: StorageError::io(domain_dir, e),
        });
    }

    for (index, record) in records.iter().enumerate() {
        let rank = index + 1;
        let file_name = output_file_name(
            rank,
            record.resolution(),
            file_extension(record.url()),
        );
        let path = domain_dir.join(file_name);
        if let Err(e) = tokio::fs::write(&path, record.bytes()).await {
            return Err(PartialSave {
                saved,
                error: StorageError::io(path, e),
            });
        }
        debug!(rank, path = %path.display(), "favicon written");
        saved.push(SavedFavicon {
            rank,
            url: record.url().to_string(),
            path,
            resolution: record.resolution(),
        });
    }
    Ok(saved)
}
