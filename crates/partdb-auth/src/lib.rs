//! # partdb-auth
//!
//! Credential verification against the Part-DB `users` table.
//!
//! Part-DB stores bcrypt password digests; this crate looks the digest
//! up by username and compares it on a blocking thread. The verdict is
//! deliberately tri-state (`Authenticated`, `Mismatched`, or an error):
//! callers must not be able to tell an unknown username from a wrong
//! password, neither by the result nor by the time the call took.

pub mod error;
pub mod store;
pub mod verifier;

pub use error::AuthError;
pub use store::{MySqlUserStore, UserStore};
pub use verifier::{Authenticator, BcryptComparer, HashComparer, PasswordVerifier, Verdict};
