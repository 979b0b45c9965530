//! Error types for contact extraction

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an extraction run
///
/// Per-message conditions (a subject or body that does not parse, an invalid
/// sender address, a repeated sender) are not errors and never show up here.
#[derive(Error, Debug)]
pub enum Error {
    /// A segment of the requested folder path does not exist
    #[error("Mail store folder not found: \"{0}\"")]
    FolderNotFound(String),

    /// The mail store could not be read
    #[error("Failed to read mail store at {}: {source}", path.display())]
    Store {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output destination could not be written
    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),
}

impl Error {
    pub(crate) fn store(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Store {
            path: path.into(),
            source,
        }
    }
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, Error>;
