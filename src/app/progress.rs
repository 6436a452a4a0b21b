//! Progress bar over the target list.

use indicatif::{ProgressBar, ProgressStyle};

/// Creates the per-site progress bar, or a hidden one when disabled.
///
/// Hidden bars still accept `println`/`inc` calls, so callers do not branch.
pub(crate) fn site_progress(show: bool, total: usize) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(u64::try_from(total).unwrap_or(u64::MAX));
    bar.set_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}
