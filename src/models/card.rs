//! Card and card-credit data models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a payment card record from the database.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Card {
    pub id: i64,
    pub card_number: String,
    pub card_type: String,
    pub expiration_date: NaiveDate,
    pub cardholder_name: String,
    pub balance: Decimal,
    pub customer_id: i64,
}

/// Request body for registering a card.
#[derive(Debug, Deserialize)]
pub struct CreateCardRequest {
    pub card_number: String,
    pub card_type: String,
    pub expiration_date: NaiveDate,
    pub cardholder_name: String,

    #[serde(default)]
    pub balance: Decimal,

    pub customer_id: i64,
}

/// Represents a credit (top-up) applied to a card.
///
/// Creating one also increases the card balance; the two writes share a
/// database transaction (see `services::card_service`).
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Credit {
    pub id: i64,
    pub card_id: i64,
    pub credit_amount: Decimal,
    pub credit_date: NaiveDate,
}

/// Request body for crediting a card.
#[derive(Debug, Deserialize)]
pub struct CreditRequest {
    pub card_id: i64,
    pub credit_amount: Decimal,
    pub credit_date: NaiveDate,
}
