//! Repository for the `client_parkings` table.

use parklot_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::occupancy::{Occupancy, OccupancyFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, client_id, parking_id, entry_time, exit_time";

/// Occupancy reads plus the crate-private open/close primitives.
pub struct OccupancyRepo;

impl OccupancyRepo {
    /// Find an occupancy by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Occupancy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM client_parkings WHERE id = $1");
        sqlx::query_as::<_, Occupancy>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List occupancies matching the filter, newest entry first.
    pub async fn list(
        pool: &PgPool,
        filter: &OccupancyFilter,
    ) -> Result<Vec<Occupancy>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM client_parkings
             WHERE ($1::BIGINT IS NULL OR client_id = $1)
               AND ($2::BIGINT IS NULL OR parking_id = $2)
               AND ($3::BOOLEAN IS NULL OR (exit_time IS NULL) = $3)
             ORDER BY entry_time DESC, id DESC"
        );
        sqlx::query_as::<_, Occupancy>(&query)
            .bind(filter.client_id)
            .bind(filter.parking_id)
            .bind(filter.active)
            .fetch_all(pool)
            .await
    }

    /// Whether the pair has an open session.
    pub(crate) async fn has_active(
        conn: &mut PgConnection,
        client_id: DbId,
        parking_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM client_parkings
                WHERE client_id = $1 AND parking_id = $2 AND exit_time IS NULL
             )",
        )
        .bind(client_id)
        .bind(parking_id)
        .fetch_one(&mut *conn)
        .await
    }

    /// Lock every open session for the pair, earliest entry first.
    pub(crate) async fn lock_active(
        conn: &mut PgConnection,
        client_id: DbId,
        parking_id: DbId,
    ) -> Result<Vec<Occupancy>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM client_parkings
             WHERE client_id = $1 AND parking_id = $2 AND exit_time IS NULL
             ORDER BY entry_time ASC, id ASC
             FOR UPDATE"
        );
        sqlx::query_as::<_, Occupancy>(&query)
            .bind(client_id)
            .bind(parking_id)
            .fetch_all(&mut *conn)
            .await
    }

    /// Insert an open session stamped with the current wall-clock time.
    pub(crate) async fn open(
        conn: &mut PgConnection,
        client_id: DbId,
        parking_id: DbId,
    ) -> Result<Occupancy, sqlx::Error> {
        let query = format!(
            "INSERT INTO client_parkings (client_id, parking_id, entry_time)
             VALUES ($1, $2, clock_timestamp())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Occupancy>(&query)
            .bind(client_id)
            .bind(parking_id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Stamp `exit_time` on an open session. Returns `None` if it was already closed.
    pub(crate) async fn close(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Occupancy>, sqlx::Error> {
        let query = format!(
            "UPDATE client_parkings SET exit_time = clock_timestamp()
             WHERE id = $1 AND exit_time IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Occupancy>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }
}
