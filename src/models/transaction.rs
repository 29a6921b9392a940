//! Transaction (ledger entry) models and API request/response types.
//!
//! A transaction row is an immutable record of a single debit or credit
//! movement on one account. Rows are append-only; nothing in the service
//! updates or deletes them. Every row references the account it belongs to
//! via `account_id`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a transaction record from the database.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Transaction {
    /// Unique identifier for this ledger row
    pub id: i64,

    /// Account this movement belongs to
    pub account_id: i64,

    /// Amount moved, always positive; direction comes from `entry_type`
    pub amount: Decimal,

    /// 3-letter currency code
    pub currency: String,

    /// Value date of the movement
    pub entry_date: NaiveDate,

    /// "debit" or "credit"
    pub entry_type: String,

    /// When the row was appended
    pub created_at: DateTime<Utc>,
}

/// Request body for recording a standalone ledger entry.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub account_id: i64,
    pub amount: Decimal,
    pub currency: String,
    pub date: NaiveDate,
    pub transaction_type: String,
}

/// Request body for an account-to-account transfer.
///
/// # JSON Example
///
/// ```json
/// {
///   "from_account_id": 1,
///   "to_account_id": 2,
///   "amount": "30.00",
///   "currency": "USD",
///   "date": "2024-01-01"
/// }
/// ```
///
/// # Atomicity Guarantee
///
/// Both balances and both ledger rows are written in the same database
/// transaction. Either all four effects persist or none do.
#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    /// Sender account (balance will decrease)
    pub from_account_id: i64,

    /// Receiver account (balance will increase)
    pub to_account_id: i64,

    /// Amount to move
    pub amount: Decimal,

    /// 3-letter currency code recorded on both ledger rows
    pub currency: String,

    /// Value date recorded on both ledger rows (ISO-8601)
    pub date: NaiveDate,
}

/// Response returned for a successful transfer.
#[derive(Debug, Serialize)]
pub struct TransferResponse {
    pub message: String,

    /// Ledger row recorded against the sender
    pub debit_transaction_id: i64,

    /// Ledger row recorded against the receiver
    pub credit_transaction_id: i64,
}
