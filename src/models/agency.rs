//! Agency data models.

use serde::{Deserialize, Serialize};

/// Represents a bank agency (branch) record from the database.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Agency {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
}

/// Request body for creating an agency.
#[derive(Debug, Deserialize)]
pub struct CreateAgencyRequest {
    pub name: String,
    pub location: Option<String>,
}
