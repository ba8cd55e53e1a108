//! Parking lot entity model and DTOs.

use parklot_core::occupancy::LotCapacity;
use parklot_core::types::{DbId, PlaceCount, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A parking lot row from the `parkings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Parking {
    pub id: DbId,
    pub number: Option<String>,
    pub address: String,
    pub opened: bool,
    pub count_places: PlaceCount,
    /// Written only by the occupancy manager after registration.
    pub count_available_places: PlaceCount,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Parking {
    /// The columns the entry/exit rules look at.
    pub fn capacity(&self) -> LotCapacity {
        LotCapacity {
            parking_id: self.id,
            opened: self.opened,
            count_places: self.count_places,
            count_available_places: self.count_available_places,
        }
    }
}

/// Aggregate capacity across all registered lots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct CapacitySummary {
    pub parkings: i64,
    pub open_parkings: i64,
    pub total_places: i64,
    pub available_places: i64,
}

/// DTO for registering a new parking lot.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_initial_availability"))]
pub struct CreateParking {
    #[validate(length(min = 1, max = 20, message = "must be between 1 and 20 characters"))]
    pub number: Option<String>,
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub address: String,
    /// Defaults to `true` if omitted.
    pub opened: Option<bool>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub count_places: PlaceCount,
    /// Defaults to `count_places` if omitted.
    pub count_available_places: Option<PlaceCount>,
}

impl CreateParking {
    /// Initial availability, defaulting to a completely free lot.
    pub fn initial_available_places(&self) -> PlaceCount {
        self.count_available_places.unwrap_or(self.count_places)
    }
}

fn validate_initial_availability(input: &CreateParking) -> Result<(), ValidationError> {
    match input.count_available_places {
        Some(available) if available < 0 || available > input.count_places => {
            let mut err = ValidationError::new("available_places");
            err.message =
                Some("count_available_places must be between 0 and count_places".into());
            Err(err)
        }
        _ => Ok(()),
    }
}
