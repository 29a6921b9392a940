//! Customer HTTP handlers.

use crate::{
    db::DbPool,
    error::{AppError, conflict_on_unique},
    models::customer::{CreateCustomerRequest, Customer},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// Register a new customer.
pub async fn create_customer(
    State(pool): State<DbPool>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    let customer = sqlx::query_as::<_, Customer>(
        r#"
        INSERT INTO customers (
            first_name, last_name, email_address, phone_number,
            address, date_of_birth, nin, rib
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(&request.first_name)
    .bind(&request.last_name)
    .bind(&request.email_address)
    .bind(&request.phone_number)
    .bind(&request.address)
    .bind(request.date_of_birth)
    .bind(&request.nin)
    .bind(&request.rib)
    .fetch_one(&pool)
    .await
    .map_err(|e| conflict_on_unique(e, "customer"))?;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// Get customer details by ID.
pub async fn get_customer(
    State(pool): State<DbPool>,
    Path(customer_id): Path<i64>,
) -> Result<Json<Customer>, AppError> {
    let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
        .bind(customer_id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("customer"))?;

    Ok(Json(customer))
}
