//! Repository for the `parkings` table.

use parklot_core::types::{DbId, PlaceCount};
use sqlx::{PgConnection, PgPool};

use crate::models::parking::{CapacitySummary, CreateParking, Parking};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, number, address, opened, count_places, count_available_places, \
     created_at, updated_at";

/// Registration and lookup for parking lots.
///
/// The counter-mutating functions are crate-private; see
/// [`crate::occupancy::OccupancyManager`].
pub struct ParkingRepo;

impl ParkingRepo {
    /// Insert a new parking lot, returning the created row.
    ///
    /// `opened` defaults to `true` and `count_available_places` to
    /// `count_places` when omitted.
    pub async fn create(pool: &PgPool, input: &CreateParking) -> Result<Parking, sqlx::Error> {
        let query = format!(
            "INSERT INTO parkings (number, address, opened, count_places, count_available_places)
             VALUES ($1, $2, COALESCE($3, TRUE), $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Parking>(&query)
            .bind(&input.number)
            .bind(&input.address)
            .bind(input.opened)
            .bind(input.count_places)
            .bind(input.initial_available_places())
            .fetch_one(pool)
            .await
    }

    /// Find a parking lot by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Parking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parkings WHERE id = $1");
        sqlx::query_as::<_, Parking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all parking lots ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Parking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parkings ORDER BY id ASC");
        sqlx::query_as::<_, Parking>(&query).fetch_all(pool).await
    }

    /// Count lots and places. Closed lots count toward the totals.
    pub async fn capacity_summary(pool: &PgPool) -> Result<CapacitySummary, sqlx::Error> {
        sqlx::query_as::<_, CapacitySummary>(
            "SELECT COUNT(*) AS parkings,
                    COUNT(*) FILTER (WHERE opened) AS open_parkings,
                    COALESCE(SUM(count_places), 0)::BIGINT AS total_places,
                    COALESCE(SUM(count_available_places), 0)::BIGINT AS available_places
             FROM parkings",
        )
        .fetch_one(pool)
        .await
    }

    /// Read a lot and take its row lock for the rest of the transaction.
    ///
    /// Concurrent callers for the same lot queue here; other lots are
    /// unaffected.
    pub(crate) async fn lock_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Parking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parkings WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Parking>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Overwrite the available-places counter of a locked lot.
    pub(crate) async fn set_available_places(
        conn: &mut PgConnection,
        id: DbId,
        available: PlaceCount,
    ) -> Result<Parking, sqlx::Error> {
        let query = format!(
            "UPDATE parkings SET count_available_places = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Parking>(&query)
            .bind(id)
            .bind(available)
            .fetch_one(&mut *conn)
            .await
    }
}
