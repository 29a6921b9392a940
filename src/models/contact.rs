//! Contact message data models.

use serde::{Deserialize, Serialize};

/// A message left through the public contact form.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ContactMessage {
    pub id: i64,
    pub full_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub message: String,
}

/// Request body for the contact endpoint.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub full_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub message: String,
}
