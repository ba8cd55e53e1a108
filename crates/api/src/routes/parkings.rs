//! Route definitions for the `/parkings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::parking;
use crate::state::AppState;

/// Routes mounted at `/parkings`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(parking::list).post(parking::create))
        .route("/{id}", get(parking::get_by_id))
}
