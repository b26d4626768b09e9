//! Error types for stylesheet lookups and rewrites.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating or rewriting a property.
#[derive(Error, Debug)]
pub enum CssError {
    /// None of the requested properties exists in the selector's first rule block.
    #[error("no matching property: {selector} has none of {}", .properties.join(", "))]
    NotFound {
        selector: String,
        properties: Vec<String>,
    },

    /// The property was found but carries nothing numeric to scale.
    #[error("{selector} {{ {property}: {value} }} has no numeric value to scale")]
    NoNumericValue {
        selector: String,
        property: String,
        value: String,
    },

    /// The request names no known element.
    #[error("could not identify an element in '{request}'")]
    UnrecognizedElement { request: String },

    /// The request names an element but no known action.
    #[error("could not identify an action in '{request}'")]
    UnrecognizedAction { request: String },

    /// An action name that is not one of `shrink`, `grow` or `none`.
    #[error("unknown action '{0}': expected shrink, grow or none")]
    InvalidAction(String),

    /// The search pattern built from the selector or property could not be compiled.
    #[error("invalid search pattern")]
    Pattern(#[from] regex::Error),

    /// The stylesheet could not be read or written.
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for stylesheet operations.
pub type Result<T> = std::result::Result<T, CssError>;
