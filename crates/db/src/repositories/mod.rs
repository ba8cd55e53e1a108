//! Repository layer: one zero-sized struct per table.
//!
//! Functions that mutate occupancy state are `pub(crate)` so only
//! [`crate::occupancy::OccupancyManager`] can reach them.

pub mod client_repo;
pub mod occupancy_repo;
pub mod parking_repo;

pub use client_repo::ClientRepo;
pub use occupancy_repo::OccupancyRepo;
pub use parking_repo::ParkingRepo;
