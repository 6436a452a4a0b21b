//! Error types for loading the target list.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the list of target sites.
///
/// Both variants are fatal for a run: there is nothing useful to do without
/// at least one target.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be read (missing, permissions, not UTF-8).
    #[error("cannot read URL list {path}: {source}\n  Suggestion: {suggestion}")]
    Read {
        /// Path of the input file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// How to fix the issue.
        suggestion: &'static str,
    },

    /// The input file contained no non-blank lines.
    #[error("the URL list {path} is empty\n  Suggestion: add one hostname or URL per line")]
    Empty {
        /// Path of the input file.
        path: PathBuf,
    },
}

impl InputError {
    /// Creates a read error, choosing the suggestion from the IO error kind.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let suggestion = if source.kind() == std::io::ErrorKind::NotFound {
            "Create the file or pass --input PATH"
        } else {
            "Check file permissions and that the file is UTF-8 text"
        };
        Self::Read {
            path: path.into(),
            source,
            suggestion,
        }
    }

    /// Creates an empty-input error.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self::Empty { path: path.into() }
    }
}
