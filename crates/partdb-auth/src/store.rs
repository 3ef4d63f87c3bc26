//! User store backends.

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::error::AuthError;

/// Lookup of stored password digests by username.
///
/// The gateway only ever talks to [`crate::Authenticator`]; this trait
/// exists so the verifier itself can be tested without a database.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch the stored password digest for `username`.
    ///
    /// Returns `Ok(None)` when no such user exists. Any other failure
    /// is a store error, never a mismatch.
    async fn lookup_password_hash(&self, username: &str) -> Result<Option<String>, AuthError>;
}

/// User store backed by the Part-DB `users` table.
pub struct MySqlUserStore {
    pool: MySqlPool,
}

impl MySqlUserStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for MySqlUserStore {
    async fn lookup_password_hash(&self, username: &str) -> Result<Option<String>, AuthError> {
        let hash: Option<String> =
            sqlx::query_scalar("SELECT password FROM users WHERE name = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;
        Ok(hash)
    }
}
