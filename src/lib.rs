//! Favicon Fetcher Core Library
//!
//! This library provides the core functionality for the favicon fetcher,
//! which downloads every favicon a site exposes, ranks them by pixel
//! resolution, and writes them to per-domain folders.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`parser`] - Loading and normalizing the list of target sites
//! - [`download`] - HTTP client for page fetches and favicon downloads
//! - [`discovery`] - Candidate extraction from markup plus fallback paths
//! - [`favicon`] - Favicon records, resolution decoding, and ranking
//! - [`storage`] - Writing ranked favicons to disk
//! - [`pipeline`] - Per-site processing and the sequential batch driver

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod discovery;
pub mod download;
pub mod favicon;
pub mod parser;
pub mod pipeline;
pub mod storage;
mod user_agent;

// Re-export commonly used types
pub use discovery::{candidate_set, extract_favicon_links, fallback_candidates};
pub use download::{FetchError, HttpClient, REQUEST_TIMEOUT_SECS};
pub use favicon::{FaviconRecord, Resolution, download_favicons, rank_favicons};
pub use parser::{InputError, Target, load_targets, parse_targets};
pub use pipeline::{
    BatchStats, SiteEvent, SiteOutcome, SiteReport, process_site, process_site_with, run_batch,
};
pub use storage::{PartialSave, SavedFavicon, StorageError, save_favicons};
pub use user_agent::PAGE_USER_AGENT;
