//! Card credit service.
//!
//! Recording a credit both appends a `credits` row and bumps the card
//! balance, so the two writes share one database transaction.

use crate::{
    db::DbPool,
    error::AppError,
    models::card::{Credit, CreditRequest},
};
use rust_decimal::Decimal;

/// Record a credit against a card and increase its balance atomically.
pub async fn record_credit(pool: &DbPool, request: &CreditRequest) -> Result<Credit, AppError> {
    if request.credit_amount <= Decimal::ZERO {
        return Err(AppError::InvalidRequest(
            "Credit amount must be positive".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;

    let updated = sqlx::query("UPDATE cards SET balance = balance + $1 WHERE id = $2")
        .bind(request.credit_amount)
        .bind(request.card_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if updated == 0 {
        tx.rollback().await?;
        return Err(AppError::NotFound("card"));
    }

    let credit = sqlx::query_as::<_, Credit>(
        r#"
        INSERT INTO credits (card_id, credit_amount, credit_date)
        VALUES ($1, $2, $3)
        RETURNING id, card_id, credit_amount, credit_date
        "#,
    )
    .bind(request.card_id)
    .bind(request.credit_amount)
    .bind(request.credit_date)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(credit)
}
