//! Agency HTTP handlers.

use crate::{
    db::DbPool,
    error::AppError,
    models::agency::{Agency, CreateAgencyRequest},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// Register a new agency.
pub async fn create_agency(
    State(pool): State<DbPool>,
    Json(request): Json<CreateAgencyRequest>,
) -> Result<(StatusCode, Json<Agency>), AppError> {
    let agency = sqlx::query_as::<_, Agency>(
        "INSERT INTO agencies (name, location) VALUES ($1, $2) RETURNING id, name, location",
    )
    .bind(&request.name)
    .bind(&request.location)
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(agency)))
}

/// Get agency details by ID.
pub async fn get_agency(
    State(pool): State<DbPool>,
    Path(agency_id): Path<i64>,
) -> Result<Json<Agency>, AppError> {
    let agency = sqlx::query_as::<_, Agency>("SELECT id, name, location FROM agencies WHERE id = $1")
        .bind(agency_id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound("agency"))?;

    Ok(Json(agency))
}
