//! Transfer HTTP handler.
//!
//! `POST /api/v1/transfers` deserializes the request, opens a PostgreSQL
//! unit of work and hands it to the transfer executor. The handler owns no
//! business logic; error mapping to HTTP status codes lives in
//! [`crate::error`].

use crate::{
    db::DbPool,
    error::AppError,
    middleware::auth::AuthContext,
    models::transaction::{TransferRequest, TransferResponse},
    services::{
        pg_uow::PgTransferUow,
        transfer::{self, TransferCommand, TransferError},
    },
};
use axum::{Extension, Json, extract::State, http::StatusCode};

/// Move money between two accounts.
///
/// # Request Body
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
/// # Responses
///
/// - **201 Created**: transfer applied; both ledger row ids returned
/// - **400 Bad Request**: non-positive amount, self-transfer, bad currency
/// - **404 Not Found**: either account id does not resolve
/// - **422 Unprocessable Entity**: insufficient funds
/// - **500 Internal Server Error**: the unit of work failed; nothing persisted
pub async fn create_transfer(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<TransferRequest>,
) -> Result<(StatusCode, Json<TransferResponse>), AppError> {
    let command = TransferCommand {
        from_account_id: request.from_account_id,
        to_account_id: request.to_account_id,
        amount: request.amount,
        currency: request.currency,
        date: request.date,
    };

    let uow = PgTransferUow::begin(&pool)
        .await
        .map_err(TransferError::from)?;
    let outcome = transfer::execute(uow, &command).await?;

    tracing::info!(
        user = %auth.username,
        from = command.from_account_id,
        to = command.to_account_id,
        amount = %command.amount,
        "transfer completed"
    );

    Ok((
        StatusCode::CREATED,
        Json(TransferResponse {
            message: "Transfer successful".to_string(),
            debit_transaction_id: outcome.debit_entry_id,
            credit_transaction_id: outcome.credit_entry_id,
        }),
    ))
}
