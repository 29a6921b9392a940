//! Loan and repayment HTTP handlers.
//!
//! - POST /api/v1/loans - Create a loan
//! - GET /api/v1/loans/:id - Get loan details
//! - POST /api/v1/repayments - Record a repayment
//! - GET /api/v1/repayments/:id - Get repayment details

use crate::{
    db::DbPool,
    error::AppError,
    models::loan::{CreateLoanRequest, CreateRepaymentRequest, Loan, Repayment},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;

/// Create a loan for a customer.
pub async fn create_loan(
    State(pool): State<DbPool>,
    Json(request): Json<CreateLoanRequest>,
) -> Result<(StatusCode, Json<Loan>), AppError> {
    if request.loan_amount <= Decimal::ZERO {
        return Err(AppError::InvalidRequest(
            "Loan amount must be positive".to_string(),
        ));
    }
    if request.end_date < request.start_date {
        return Err(AppError::InvalidRequest(
            "End date must not precede start date".to_string(),
        ));
    }

    let customer_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)")
            .bind(request.customer_id)
            .fetch_one(&pool)
            .await?;
    if !customer_exists {
        return Err(AppError::NotFound("customer"));
    }

    let loan = sqlx::query_as::<_, Loan>(
        r#"
        INSERT INTO loans (customer_id, loan_amount, interest_rate, start_date, end_date, outstanding_balance)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(request.customer_id)
    .bind(request.loan_amount)
    .bind(request.interest_rate)
    .bind(request.start_date)
    .bind(request.end_date)
    .bind(request.outstanding_balance)
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(loan)))
}

/// Get loan details by ID.
pub async fn get_loan(
    State(pool): State<DbPool>,
    Path(loan_id): Path<i64>,
) -> Result<Json<Loan>, AppError> {
    let loan = sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE id = $1")
        .bind(loan_id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("loan"))?;

    Ok(Json(loan))
}

/// Record a repayment against a loan.
pub async fn create_repayment(
    State(pool): State<DbPool>,
    Json(request): Json<CreateRepaymentRequest>,
) -> Result<(StatusCode, Json<Repayment>), AppError> {
    if request.repayment_amount <= Decimal::ZERO {
        return Err(AppError::InvalidRequest(
            "Repayment amount must be positive".to_string(),
        ));
    }

    let loan_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM loans WHERE id = $1)")
        .bind(request.loan_id)
        .fetch_one(&pool)
        .await?;
    if !loan_exists {
        return Err(AppError::NotFound("loan"));
    }

    let repayment = sqlx::query_as::<_, Repayment>(
        r#"
        INSERT INTO repayments (loan_id, repayment_date, repayment_amount)
        VALUES ($1, $2, $3)
        RETURNING id, loan_id, repayment_date, repayment_amount
        "#,
    )
    .bind(request.loan_id)
    .bind(request.repayment_date)
    .bind(request.repayment_amount)
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(repayment)))
}

/// Get repayment details by ID.
pub async fn get_repayment(
    State(pool): State<DbPool>,
    Path(repayment_id): Path<i64>,
) -> Result<Json<Repayment>, AppError> {
    let repayment = sqlx::query_as::<_, Repayment>(
        "SELECT id, loan_id, repayment_date, repayment_amount FROM repayments WHERE id = $1",
    )
    .bind(repayment_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("repayment"))?;

    Ok(Json(repayment))
}
