//! Error types for the export pipeline.

use thiserror::Error;

/// Errors that can occur while building CSV output.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The configured output encoding label is not supported.
    /// Raised at startup, never per request.
    #[error("unknown output encoding: {0}")]
    UnknownEncoding(String),

    /// CSV serialization of a row failed.
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// A serialized row was not valid UTF-8.
    #[error("serialized row was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
