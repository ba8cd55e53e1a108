//! Route definitions for `/client_parkings`.

use axum::routing::get;
use axum::Router;

use crate::handlers::occupancy;
use crate::state::AppState;

/// Routes mounted at `/client_parkings`.
///
/// ```text
/// GET    /   -> list
/// POST   /   -> enter
/// DELETE /   -> exit
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(occupancy::list)
            .post(occupancy::enter)
            .delete(occupancy::exit),
    )
}
