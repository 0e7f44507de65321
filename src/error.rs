use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the I/O edges of the summarizer.
///
/// The scoring pipeline itself is infallible; only reading the source text or
/// a stopword list can fail.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read standard input")]
    Stdin(#[source] io::Error),
}

impl SummaryError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SummaryError::Read {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SummaryError>;
