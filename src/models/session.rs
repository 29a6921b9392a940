//! Session model backing bearer-token authentication.
//!
//! Sessions replace the framework-managed login state of the old system with
//! explicit, revocable tokens. Only the SHA-256 hash of a token is stored.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,

    /// Revoked sessions are rejected during authentication. This provides a
    /// way to log out without deleting the record.
    pub revoked: bool,
}
