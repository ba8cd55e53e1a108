//! Handlers for `/client_parkings`: entry, exit and session listing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use parklot_db::models::occupancy::{Occupancy, OccupancyFilter, OccupancyRequest};
use parklot_db::repositories::OccupancyRepo;

use crate::error::AppResult;
use crate::extract::{ApiQuery, ValidatedJson};
use crate::state::AppState;

/// POST /client_parkings
///
/// Park a client. Returns the open session with `201 Created`.
pub async fn enter(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<OccupancyRequest>,
) -> AppResult<(StatusCode, Json<Occupancy>)> {
    let occupancy = state
        .occupancy
        .enter(&state.pool, input.client_id, input.parking_id)
        .await?;
    Ok((StatusCode::CREATED, Json(occupancy)))
}

/// DELETE /client_parkings
///
/// Release a client. Returns the closed session with `200 OK`.
pub async fn exit(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<OccupancyRequest>,
) -> AppResult<Json<Occupancy>> {
    let occupancy = state
        .occupancy
        .exit(&state.pool, input.client_id, input.parking_id)
        .await?;
    Ok(Json(occupancy))
}

/// GET /client_parkings?client_id=&parking_id=&active=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<OccupancyFilter>,
) -> AppResult<Json<Vec<Occupancy>>> {
    let sessions = OccupancyRepo::list(&state.pool, &filter).await?;
    tracing::debug!(count = sessions.len(), "Listed occupancies");
    Ok(Json(sessions))
}
