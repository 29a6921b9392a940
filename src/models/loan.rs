//! Loan and repayment data models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a loan record from the database.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Loan {
    pub id: i64,
    pub customer_id: i64,
    pub loan_amount: Decimal,

    /// Annual interest rate in percent, e.g. 4.50
    pub interest_rate: Decimal,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub outstanding_balance: Decimal,
}

/// Request body for creating a loan.
#[derive(Debug, Deserialize)]
pub struct CreateLoanRequest {
    pub customer_id: i64,
    pub loan_amount: Decimal,
    pub interest_rate: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Defaults to 0 when omitted
    #[serde(default)]
    pub outstanding_balance: Decimal,
}

/// Represents a repayment made against a loan.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Repayment {
    pub id: i64,
    pub loan_id: i64,
    pub repayment_date: NaiveDate,
    pub repayment_amount: Decimal,
}

/// Request body for recording a repayment.
#[derive(Debug, Deserialize)]
pub struct CreateRepaymentRequest {
    pub loan_id: i64,
    pub repayment_date: NaiveDate,
    pub repayment_amount: Decimal,
}
