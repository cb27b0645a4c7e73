//! Error handling for the `GedReader`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Specialized error type for the `GedReader`
///
/// The parsing, filtering, and place-analysis pipelines are infallible by design
/// (malformed input degrades to partial data, never to an error), so the only
/// fallible surface is loading file contents from disk.
#[derive(Debug, Error)]
pub enum GedReaderError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    /// A path that was expected to be a readable file
    #[error("Not a readable file: {}", path.display())]
    NotAFile {
        /// The offending path
        path: PathBuf,
    },
    /// File contents that could not be decoded as UTF-8 text
    #[error("Invalid UTF-8 in {}: {message}", path.display())]
    EncodingError {
        /// The offending path
        path: PathBuf,
        /// Description of the decoding failure
        message: String,
    },
}

/// Result type for `GedReader` operations
pub type Result<T> = std::result::Result<T, GedReaderError>;
