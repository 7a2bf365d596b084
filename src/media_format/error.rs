//! Error types for matching and rename planning.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for media formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Terminal errors for a single formatting run.
///
/// Per-file problems (missing episode number, failed rename) are not errors at this level:
/// they are recorded in the plan or the apply summary.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The base title hint is empty or whitespace-only.
    #[error("base title is empty")]
    EmptyHint,

    /// The directory does not contain any regular files.
    #[error("directory does not contain any files: {}", path.display())]
    EmptyDirectory {
        /// The directory that was listed.
        path: PathBuf,
    },

    /// No tokenization strategy matched a single file.
    #[error("no files could be detected from base title '{hint}'")]
    NoMatch {
        /// The hint as given by the user.
        hint: String,
    },

    /// Reading the directory failed.
    #[error("failed to read directory {}: {source}", path.display())]
    Io {
        /// The directory that was being read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
