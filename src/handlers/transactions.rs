//! Transaction (ledger entry) HTTP handlers.
//!
//! - POST /api/v1/transactions - Record a standalone ledger entry
//! - GET /api/v1/transactions/:id - Get a ledger entry

use crate::{
    db::DbPool,
    error::AppError,
    models::transaction::{CreateTransactionRequest, Transaction},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;

/// Record a standalone ledger entry against an account.
///
/// Transfers should go through `POST /api/v1/transfers`; this endpoint
/// exists for one-sided adjustments (fees, corrections) and does not touch
/// the account balance.
pub async fn create_transaction(
    State(pool): State<DbPool>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    if request.amount <= Decimal::ZERO {
        return Err(AppError::InvalidRequest(
            "Amount must be positive".to_string(),
        ));
    }
    if request.transaction_type != "debit" && request.transaction_type != "credit" {
        return Err(AppError::InvalidRequest(
            "Transaction type must be 'debit' or 'credit'".to_string(),
        ));
    }

    // Fail with 404 rather than a foreign-key error.
    let account_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM accounts WHERE id = $1)")
            .bind(request.account_id)
            .fetch_one(&pool)
            .await?;
    if !account_exists {
        return Err(AppError::NotFound("account"));
    }

    let transaction = sqlx::query_as::<_, Transaction>(
        r#"
        INSERT INTO transactions (account_id, amount, currency, entry_date, entry_type)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, account_id, amount, currency, entry_date, entry_type, created_at
        "#,
    )
    .bind(request.account_id)
    .bind(request.amount)
    .bind(&request.currency)
    .bind(request.date)
    .bind(&request.transaction_type)
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Get a ledger entry by ID.
pub async fn get_transaction(
    State(pool): State<DbPool>,
    Path(transaction_id): Path<i64>,
) -> Result<Json<Transaction>, AppError> {
    let transaction = sqlx::query_as::<_, Transaction>(
        r#"
        SELECT id, account_id, amount, currency, entry_date, entry_type, created_at
        FROM transactions
        WHERE id = $1
        "#,
    )
    .bind(transaction_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("transaction"))?;

    Ok(Json(transaction))
}
