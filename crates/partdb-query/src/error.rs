//! Error types for row fetching.

use thiserror::Error;

/// Errors that can occur while fetching rows.
///
/// A failed query or a row that fails to decode aborts the whole
/// fetch; partial results are never returned.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Query execution or row decoding failed.
    #[error("database query failed: {0}")]
    Database(#[from] sqlx::Error),
}
