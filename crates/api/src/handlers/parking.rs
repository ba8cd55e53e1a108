//! Handlers for the `/parkings` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use parklot_core::error::CoreError;
use parklot_core::types::DbId;
use parklot_db::models::parking::{CreateParking, Parking};
use parklot_db::repositories::ParkingRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::state::AppState;

/// POST /parkings
///
/// New lots start fully available unless `count_available_places` is given.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateParking>,
) -> AppResult<(StatusCode, Json<Parking>)> {
    let parking = ParkingRepo::create(&state.pool, &input).await?;
    tracing::debug!(
        parking_id = parking.id,
        count_places = parking.count_places,
        "Registered parking"
    );
    Ok((StatusCode::CREATED, Json(parking)))
}

/// GET /parkings
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Parking>>> {
    let parkings = ParkingRepo::list(&state.pool).await?;
    Ok(Json(parkings))
}

/// GET /parkings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Parking>> {
    let parking = ParkingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Parking",
            id,
        }))?;
    Ok(Json(parking))
}
