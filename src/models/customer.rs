//! Customer data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a customer record from the database.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub date_of_birth: NaiveDate,
    pub nin: String,
    pub rib: String,
}

/// Request body for creating a customer.
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub date_of_birth: NaiveDate,
    pub nin: String,
    pub rib: String,
}
