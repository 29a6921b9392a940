//! Authentication handlers: signup, login, logout.
//!
//! Login issues an opaque bearer token; only its SHA-256 hash is stored in
//! the `sessions` table. Logout revokes the presented token. Handlers never
//! see framework-managed login state - authentication context is rebuilt
//! per request by the middleware.

use crate::{
    db::DbPool,
    error::{AppError, conflict_on_unique},
    middleware::auth::sha256_hex,
    models::user::{LoginRequest, LoginResponse, SignupRequest, User, UserResponse},
};
use axum::{Json, extract::State, http::HeaderMap, http::StatusCode};
use rand::RngCore;
use serde_json::{Value, json};

/// Create a new back-office user.
///
/// # Endpoint
///
/// `POST /api/v1/auth/signup` (public)
///
/// # Response
///
/// - **201 Created**: the created user (without password hash)
/// - **409 Conflict**: username or email already taken
pub async fn signup(
    State(pool): State<DbPool>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    if request.password.is_empty() {
        return Err(AppError::InvalidRequest(
            "Password must not be empty".to_string(),
        ));
    }

    let password_hash = sha256_hex(&request.password);

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (
            username, password_hash, email_address, first_name, last_name,
            date_of_birth, address, phone_number, nin, rib, agency_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(&request.username)
    .bind(&password_hash)
    .bind(&request.email_address)
    .bind(&request.first_name)
    .bind(&request.last_name)
    .bind(request.date_of_birth)
    .bind(&request.address)
    .bind(&request.phone_number)
    .bind(&request.nin)
    .bind(&request.rib)
    .bind(request.agency_id)
    .fetch_one(&pool)
    .await
    .map_err(|e| conflict_on_unique(e, "user"))?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Authenticate a user and issue a session token.
///
/// # Endpoint
///
/// `POST /api/v1/auth/login` (public)
///
/// The credential check and the "no such user" case both answer 401 so the
/// endpoint does not leak which emails exist.
pub async fn login(
    State(pool): State<DbPool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email_address = $1")
        .bind(&request.email_address)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if sha256_hex(&request.password) != user.password_hash {
        return Err(AppError::Unauthorized);
    }

    // 32 random bytes, hex-encoded. The client keeps the plaintext; we keep
    // only the hash.
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    let token = hex::encode(bytes);

    sqlx::query("INSERT INTO sessions (user_id, token_hash) VALUES ($1, $2)")
        .bind(user.id)
        .bind(sha256_hex(&token))
        .execute(&pool)
        .await?;

    tracing::info!(user_id = user.id, "user logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

/// Revoke the presented session token.
///
/// # Endpoint
///
/// `POST /api/v1/auth/logout` (authenticated)
pub async fn logout(
    State(pool): State<DbPool>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let token = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized)?;

    sqlx::query("UPDATE sessions SET revoked = true WHERE token_hash = $1")
        .bind(sha256_hex(token))
        .execute(&pool)
        .await?;

    Ok(Json(json!({ "message": "Logged out successfully" })))
}
