//! Password verification with a timing-equalized miss path.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AuthError;
use crate::store::UserStore;

/// A fixed, precomputed bcrypt digest compared against when the
/// username does not exist. Keeps the cost of a miss equal to the cost
/// of a hit so response timing cannot be used to enumerate usernames.
/// The plaintext behind it is not known to anyone; no real password
/// can match it in practice.
const DUMMY_HASH: &str = "$2a$10$PuzrdtSJWGVOCwpMA5bIReejK/nfO1Bj8mwxJhJZdydRYvqnN87Oy";

/// Outcome of a successful verification call.
///
/// `Mismatched` covers both "no such user" and "wrong password";
/// callers are given no way to tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Authenticated,
    Mismatched,
}

/// Capability interface the gateway authenticates through.
///
/// One concrete backend exists today ([`PasswordVerifier`]); the trait
/// keeps the gateway independent of where credentials actually live.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> Result<Verdict, AuthError>;
}

/// The comparison step of verification.
///
/// Injectable so tests can observe that the comparison runs exactly
/// once per call on every path, including the unknown-user path where
/// the verdict is already decided before it runs.
pub trait HashComparer: Send + Sync {
    fn compare(&self, password: &str, digest: &str) -> Result<bool, bcrypt::BcryptError>;
}

/// The real comparison backend.
pub struct BcryptComparer;

impl HashComparer for BcryptComparer {
    fn compare(&self, password: &str, digest: &str) -> Result<bool, bcrypt::BcryptError> {
        bcrypt::verify(password, digest)
    }
}

/// Verifier backed by a [`UserStore`] of bcrypt digests.
pub struct PasswordVerifier {
    store: Arc<dyn UserStore>,
    comparer: Arc<dyn HashComparer>,
}

impl PasswordVerifier {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self::with_comparer(store, Arc::new(BcryptComparer))
    }

    /// Create a verifier with a custom comparison backend.
    pub fn with_comparer(store: Arc<dyn UserStore>, comparer: Arc<dyn HashComparer>) -> Self {
        Self { store, comparer }
    }
}

#[async_trait]
impl Authenticator for PasswordVerifier {
    /// Verify `password` against the digest stored for `username`.
    ///
    /// Exactly one store lookup and exactly one bcrypt comparison per
    /// call, on every path. When the user does not exist the
    /// comparison runs against [`DUMMY_HASH`] and the result is
    /// discarded; do not "optimize" this into an early return, the
    /// wasted comparison is the point.
    async fn verify(&self, username: &str, password: &str) -> Result<Verdict, AuthError> {
        let stored = self.store.lookup_password_hash(username).await?;
        let user_found = stored.is_some();
        let digest = stored.unwrap_or_else(|| DUMMY_HASH.to_string());

        let password = password.to_string();
        let comparer = Arc::clone(&self.comparer);
        let matched =
            tokio::task::spawn_blocking(move || comparer.compare(&password, &digest)).await?;

        if !user_found {
            return Ok(Verdict::Mismatched);
        }
        match matched {
            Ok(true) => Ok(Verdict::Authenticated),
            Ok(false) => Ok(Verdict::Mismatched),
            Err(e) => Err(AuthError::Hash(e)),
        }
    }
}
