//! Resolution-based ranking of downloaded favicons.

use std::cmp::Reverse;

use super::record::FaviconRecord;

/// Sorts records by pixel area, largest first.
///
/// The sort is stable: records with equal area keep their download order,
/// and undecodable (zero-area) records end up last.
#[must_use]
pub fn rank_favicons(mut records: Vec<FaviconRecord>) -> Vec<FaviconRecord> {
    records.sort_by_key(|record| Reverse(record.resolution().area()));
    records
}
