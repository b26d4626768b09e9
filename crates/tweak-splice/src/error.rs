//! Splice errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while finding or replacing an HTML block.
#[derive(Error, Debug)]
pub enum SpliceError {
    /// The marker text does not occur in the document.
    #[error("marker not found: {marker}")]
    MarkerNotFound { marker: String },

    /// The marker does not begin with an opening tag such as `<div ...>`.
    #[error("marker is not an opening tag: {marker}")]
    InvalidMarker { marker: String },

    /// The block opened on `line` is never closed.
    #[error("<{tag}> opened on line {line} has no matching </{tag}>")]
    Unbalanced { tag: String, line: usize },

    /// Replacement content has more markup after its wrapping element.
    #[error("replacement has content after its closing </{tag}> on line {line}")]
    TrailingContent { tag: String, line: usize },

    /// A file could not be read or written.
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for splice operations.
pub type Result<T> = std::result::Result<T, SpliceError>;
