//! Back-office user models and authentication request/response types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Represents a back-office user record from the database.
///
/// The password is stored as a SHA-256 hex digest in `password_hash`; the
/// plaintext never touches the database.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub email_address: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub nin: Option<String>,
    pub rib: Option<String>,
    pub agency_id: Option<i64>,
    pub registration_date: DateTime<Utc>,
}

/// Request body for creating a user.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub email_address: String,
    pub date_of_birth: NaiveDate,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub nin: Option<String>,
    pub rib: Option<String>,
    pub agency_id: Option<i64>,
}

/// Request body for logging in.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email_address: String,
    pub password: String,
}

/// Response body for a successful login.
///
/// The token is returned once and stored only as a hash; clients present it
/// as `Authorization: Bearer <token>` on subsequent requests.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// User representation returned to clients (no password hash).
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email_address: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub nin: Option<String>,
    pub rib: Option<String>,
    pub agency_id: Option<i64>,
    pub registration_date: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email_address: user.email_address,
            first_name: user.first_name,
            last_name: user.last_name,
            date_of_birth: user.date_of_birth,
            address: user.address,
            phone_number: user.phone_number,
            nin: user.nin,
            rib: user.rib,
            agency_id: user.agency_id,
            registration_date: user.registration_date,
        }
    }
}
