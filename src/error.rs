//! Error types for envelope extraction

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a mail tree
#[derive(Error, Debug)]
pub enum Error {
    /// The directory walk itself failed (missing root, unreadable directory)
    #[error("walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// A file found by the walk could not be opened
    #[error("open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    /// A file was opened but reading its contents failed
    #[error("read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The file is not a parseable MIME message
    #[error("failed to parse email header: {0}")]
    Parse(String),

    /// Writing a CSV row failed
    #[error("csv output: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the output stream failed
    #[error("output: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether the walk may continue past this error.
    ///
    /// A file that was opened but could not be read or parsed is skipped.
    /// Everything else, including a file that cannot be opened, aborts the run.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse(_))
    }
}

/// Result type for envelope extraction
pub type Result<T> = std::result::Result<T, Error>;
