//! Account management HTTP handlers.
//!
//! - POST /api/v1/accounts - Open a new account
//! - GET /api/v1/accounts/:id - Get account details

use crate::{
    db::DbPool,
    error::{AppError, conflict_on_unique},
    models::account::{Account, CreateAccountRequest},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;

/// Open a new account.
///
/// # Response
///
/// - **201 Created**: the created account
/// - **400 Bad Request**: negative opening balance
/// - **409 Conflict**: account number already in use
pub async fn create_account(
    State(pool): State<DbPool>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<Account>), AppError> {
    if request.balance < Decimal::ZERO {
        return Err(AppError::InvalidRequest(
            "Opening balance must not be negative".to_string(),
        ));
    }

    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (customer_id, account_number, account_type, balance, agency_id, user_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, customer_id, account_number, account_type, balance, agency_id, user_id
        "#,
    )
    .bind(request.customer_id)
    .bind(&request.account_number)
    .bind(&request.account_type)
    .bind(request.balance)
    .bind(request.agency_id)
    .bind(request.user_id)
    .fetch_one(&pool)
    .await
    .map_err(|e| conflict_on_unique(e, "account"))?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// Get a specific account by ID.
pub async fn get_account(
    State(pool): State<DbPool>,
    Path(account_id): Path<i64>,
) -> Result<Json<Account>, AppError> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, customer_id, account_number, account_type, balance, agency_id, user_id
        FROM accounts
        WHERE id = $1
        "#,
    )
    .bind(account_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("account"))?;

    Ok(Json(account))
}
