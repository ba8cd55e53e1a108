pub mod client_parkings;
pub mod clients;
pub mod health;
pub mod parkings;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /clients                 list, register
/// /clients/{id}            get
///
/// /parkings                list, register
/// /parkings/{id}           get
///
/// /client_parkings         enter (POST), exit (DELETE), list sessions (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", clients::router())
        .nest("/parkings", parkings::router())
        .nest("/client_parkings", client_parkings::router())
}
