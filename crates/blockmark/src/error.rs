//! Error types for HTML to Markdown conversion.

use thiserror::Error;

/// Errors that can occur while loading a document for conversion.
///
/// The block renderers themselves never fail; every error here comes from
/// turning input bytes into a document with a body.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The requested input encoding label is not recognised.
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    /// The parsed document has neither a `body` nor a `frameset` element.
    #[error("Document has no body element")]
    MissingBody,

    /// I/O error while reading the document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;
