//! Domain types and rules for the parking occupancy service.
//!
//! Nothing in this crate performs I/O. The database crate feeds row data
//! into the rules here and acts on the verdicts.

pub mod error;
pub mod occupancy;
pub mod types;
pub mod validation;
