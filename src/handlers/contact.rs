//! Public contact form handler.

use crate::{
    db::DbPool,
    error::AppError,
    models::contact::{ContactMessage, ContactRequest},
};
use axum::{Json, extract::State, http::StatusCode};

/// Store a message from the public contact form.
pub async fn create_contact_message(
    State(pool): State<DbPool>,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactMessage>), AppError> {
    let message = sqlx::query_as::<_, ContactMessage>(
        r#"
        INSERT INTO contact_messages (full_name, email_address, phone_number, message)
        VALUES ($1, $2, $3, $4)
        RETURNING id, full_name, email_address, phone_number, message
        "#,
    )
    .bind(&request.full_name)
    .bind(&request.email_address)
    .bind(&request.phone_number)
    .bind(&request.message)
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(message)))
}
