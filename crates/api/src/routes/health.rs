//! `GET /health`: liveness plus a snapshot of lot capacity.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use parklot_db::models::parking::CapacitySummary;
use parklot_db::repositories::ParkingRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Lock wait bound applied to every entry and exit.
    pub occupancy_lock_timeout_ms: u64,
    /// Omitted when the database is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<CapacitySummary>,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = parklot_db::health_check(&state.pool).await.is_ok();

    let capacity = if db_healthy {
        match ParkingRepo::capacity_summary(&state.pool).await {
            Ok(summary) => Some(summary),
            Err(err) => {
                tracing::warn!(error = %err, "Capacity summary unavailable");
                None
            }
        }
    } else {
        None
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        occupancy_lock_timeout_ms: state.config.occupancy_lock_timeout_ms,
        capacity,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
