//! Request handlers.
//!
//! Registration handlers delegate to the repositories in `parklot_db`;
//! occupancy handlers go through the [`parklot_db::occupancy::OccupancyManager`]
//! held in [`crate::state::AppState`]. Errors map via [`crate::error::AppError`].

pub mod client;
pub mod occupancy;
pub mod parking;
