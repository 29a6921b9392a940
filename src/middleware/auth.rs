//! Session-token authentication middleware.
//!
//! Protected requests carry `Authorization: Bearer <token>`. The token is
//! hashed with SHA-256 and matched against the `sessions` table; a hit
//! injects an [`AuthContext`] into the request extensions, a miss is
//! rejected with HTTP 401.
//!
//! There is no server-side login state beyond the session row itself: the
//! context is built per request and handlers stay stateless.

use crate::{db::DbPool, error::AppError, models::session::Session};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};

/// Authentication context attached to authenticated requests.
///
/// Route handlers extract this with `Extension<AuthContext>` to know which
/// back-office user made the request.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// ID of the authenticated user
    pub user_id: i64,

    /// Username of the authenticated user
    pub username: String,
}

/// Hex-encoded SHA-256 digest. Used for both session tokens and password
/// storage so the plaintext never reaches the database.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Session authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization: Bearer <token>` header
/// 2. Hash the token with SHA-256
/// 3. Look up a non-revoked session with that hash, joined to its user
/// 4. Found: inject [`AuthContext`], call the next handler
/// 5. Not found: return 401 Unauthorized
pub async fn auth_middleware(
    State(pool): State<DbPool>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    let token_hash = sha256_hex(token);

    let session = sqlx::query_as::<_, Session>(
        r#"
        SELECT id, user_id, token_hash, created_at, revoked
        FROM sessions
        WHERE token_hash = $1 AND revoked = false
        "#,
    )
    .bind(&token_hash)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::Unauthorized)?;

    let username: String = sqlx::query_scalar("SELECT username FROM users WHERE id = $1")
        .bind(session.user_id)
        .fetch_one(&pool)
        .await?;

    request.extensions_mut().insert(AuthContext {
        user_id: session.user_id,
        username,
    });

    Ok(next.run(request).await)
}
