//! Target sites parsed from the input list.

use std::fmt;

/// Scheme prepended to lines that do not mention `http` anywhere.
const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// A single site to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Trimmed input line.
    pub raw: String,
    /// URL used for fetching (scheme added when missing).
    pub url: String,
}

impl Target {
    /// Creates a target from a trimmed input line.
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        Self {
            raw: line.to_string(),
            url: normalize_target(line),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Prepends `https://` to a line that does not contain `http`.
///
/// The check is a plain substring test: `example.com/http-guide` is used
/// unmodified even though it has no scheme.
#[must_use]
pub fn normalize_target(line: &str) -> String {
    if line.contains("http") {
        line.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{line}")
    }
}
