//! Client entity model and DTOs.

use parklot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub surname: Option<String>,
    pub credit_card: Option<String>,
    pub car_number: Option<String>,
    /// Unique across clients when present.
    pub email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClient {
    #[validate(length(min = 1, max = 80, message = "must be between 1 and 80 characters"))]
    pub name: String,
    #[validate(length(max = 80, message = "must be at most 80 characters"))]
    pub surname: Option<String>,
    #[validate(length(max = 32, message = "must be at most 32 characters"))]
    pub credit_card: Option<String>,
    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    pub car_number: Option<String>,
    #[validate(
        email(message = "must be a valid email address"),
        length(max = 120, message = "must be at most 120 characters")
    )]
    pub email: Option<String>,
}
