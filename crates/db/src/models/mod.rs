pub mod client;
pub mod occupancy;
pub mod parking;
