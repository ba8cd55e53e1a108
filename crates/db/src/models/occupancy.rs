//! Occupancy (client ↔ parking session) model and DTOs.

use parklot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `client_parkings` table.
///
/// `exit_time` is `None` while the client is still parked.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Occupancy {
    pub id: DbId,
    pub client_id: DbId,
    pub parking_id: DbId,
    pub entry_time: Timestamp,
    pub exit_time: Option<Timestamp>,
}

impl Occupancy {
    pub fn is_active(&self) -> bool {
        self.exit_time.is_none()
    }
}

/// Body of both entry (`POST`) and exit (`DELETE`) requests.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct OccupancyRequest {
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub client_id: DbId,
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub parking_id: DbId,
}

/// Filters for listing occupancies. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OccupancyFilter {
    pub client_id: Option<DbId>,
    pub parking_id: Option<DbId>,
    /// `Some(true)` keeps only open sessions, `Some(false)` only closed ones.
    pub active: Option<bool>,
}
