//! Account data models and API request/response types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an account record from the database.
///
/// # Balance Storage
///
/// Balances are stored as `NUMERIC(12,2)` and carried as
/// [`rust_decimal::Decimal`], so arithmetic is exact fixed-point - never
/// floats. The database enforces `CHECK (balance >= 0)`; the only write path
/// that mutates a balance after creation is the transfer unit of work.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Unique identifier for this account
    pub id: i64,

    /// Customer this account is held for
    pub customer_id: i64,

    /// External-facing account number (unique)
    pub account_number: String,

    /// Account type, e.g. "checking" or "savings"
    pub account_type: String,

    /// Current balance, always non-negative
    pub balance: Decimal,

    /// Agency managing this account
    pub agency_id: i64,

    /// Back-office user who opened the account
    pub user_id: i64,
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "customer_id": 1,
///   "account_number": "FR76-0001",
///   "account_type": "checking",
///   "balance": "250.00",
///   "agency_id": 1,
///   "user_id": 1
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub customer_id: i64,
    pub account_number: String,
    pub account_type: String,

    /// Opening balance (defaults to 0 if not provided)
    #[serde(default)]
    pub balance: Decimal,

    pub agency_id: i64,
    pub user_id: i64,
}
