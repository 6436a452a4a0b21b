//! Input loading for the list of target sites.
//!
//! The input is a newline-delimited list of hostnames or URLs. Blank lines are
//! ignored, surrounding whitespace is trimmed, and lines without `http` get an
//! `https://` prefix.
//!
//! # Example
//!
//! ```
//! use favicon_core::parser::parse_targets;
//!
//! let targets = parse_targets("example.com\n\n  https://rust-lang.org  \n");
//! assert_eq!(targets.len(), 2);
//! assert_eq!(targets[0].url, "https://example.com");
//! assert_eq!(targets[1].url, "https://rust-lang.org");
//! ```

mod error;
mod input;

pub use error::InputError;
pub use input::{Target, normalize_target};

use std::path::Path;

use tracing::debug;

/// Parses the target list text into ordered targets, skipping blank lines.
#[must_use]
pub fn parse_targets(input: &str) -> Vec<Target> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Target::from_line)
        .collect()
}

/// Reads the target list from `path`.
///
/// # Errors
///
/// Returns [`InputError::Read`] when the file cannot be read and
/// [`InputError::Empty`] when it contains no non-blank lines.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_targets(path: &Path) -> Result<Vec<Target>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|e| InputError::read(path, e))?;
    let targets = parse_targets(&text);
    if targets.is_empty() {
        return Err(InputError::empty(path));
    }
    debug!(count = targets.len(), "loaded targets");
    Ok(targets)
}
