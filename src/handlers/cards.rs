//! Card and card-credit HTTP handlers.

use crate::{
    db::DbPool,
    error::{AppError, conflict_on_unique},
    models::card::{Card, CreateCardRequest, Credit, CreditRequest},
    services::card_service,
};
use axum::{Json, extract::State, http::StatusCode};

/// Register a payment card for a customer.
pub async fn create_card(
    State(pool): State<DbPool>,
    Json(request): Json<CreateCardRequest>,
) -> Result<(StatusCode, Json<Card>), AppError> {
    let customer_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)")
            .bind(request.customer_id)
            .fetch_one(&pool)
            .await?;
    if !customer_exists {
        return Err(AppError::NotFound("customer"));
    }

    let card = sqlx::query_as::<_, Card>(
        r#"
        INSERT INTO cards (card_number, card_type, expiration_date, cardholder_name, balance, customer_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, card_number, card_type, expiration_date, cardholder_name, balance, customer_id
        "#,
    )
    .bind(&request.card_number)
    .bind(&request.card_type)
    .bind(request.expiration_date)
    .bind(&request.cardholder_name)
    .bind(request.balance)
    .bind(request.customer_id)
    .fetch_one(&pool)
    .await
    .map_err(|e| conflict_on_unique(e, "card"))?;

    Ok((StatusCode::CREATED, Json(card)))
}

/// Credit a card, bumping its balance and recording the credit atomically.
pub async fn create_credit(
    State(pool): State<DbPool>,
    Json(request): Json<CreditRequest>,
) -> Result<(StatusCode, Json<Credit>), AppError> {
    let credit = card_service::record_credit(&pool, &request).await?;

    Ok((StatusCode::CREATED, Json(credit)))
}
