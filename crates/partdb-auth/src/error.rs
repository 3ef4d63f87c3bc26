//! Error types for credential verification.

use thiserror::Error;

/// Errors that can occur while verifying credentials.
///
/// A wrong password is not an error; it is the `Mismatched` verdict.
/// These variants cover the cases where verification itself broke.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The user store could not be queried.
    #[error("user store lookup failed: {0}")]
    Store(#[from] sqlx::Error),

    /// The stored digest could not be parsed or compared.
    #[error("password hash comparison failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// The blocking comparison task was cancelled or panicked.
    #[error("hash comparison task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
