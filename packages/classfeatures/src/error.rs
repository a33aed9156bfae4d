//! Error types for the converter.
//!
//! `ConverterError` covers the three failure families of a run: the input
//! cannot be read, the output cannot be written, or the document does not
//! have the heading structure the extractor relies on.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// Input markup file could not be read.
    #[error("Failed to read input file {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output SQL file could not be written.
    #[error("Failed to write output file {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document contains no qualifying feature heading.
    #[error("No feature headings found: expected at least one <{tag}> without class or style")]
    NoFeatureHeadings { tag: String },

    /// A feature heading does not carry its label as the second content child.
    #[error("Malformed heading structure in feature heading #{index}: {heading}")]
    MalformedHeading { index: usize, heading: String },

    /// Heading tag option is not a plain HTML tag name.
    #[error("Invalid tag name: '{0}'. Expected a lowercase HTML tag name (e.g., h4)")]
    InvalidTagName(String),

    /// No output path was given and dry-run mode is off.
    #[error("An output file is required unless --dry is given")]
    MissingOutput,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConverterError>;
