//! Occupancy manager: the single writer of lot counters and sessions.
//!
//! Every entry and exit runs as one unit of work inside a transaction:
//!
//! 1. bound lock waits with `lock_timeout`
//! 2. lock the lot row (`SELECT ... FOR UPDATE`)
//! 3. evaluate the rules in [`parklot_core::occupancy`]
//! 4. write the counter and the session row
//!
//! Locks are always taken lot first, then session rows, so entry and exit
//! cannot deadlock each other. Only callers touching the same lot queue on
//! that lock. Dropping the transaction on any error discards all writes.

use std::time::Duration;

use parklot_core::error::CoreError;
use parklot_core::occupancy::{self, EntryRefusal};
use parklot_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::occupancy::Occupancy;
use crate::repositories::{ClientRepo, OccupancyRepo, ParkingRepo};
use crate::sqlstate;

/// Index enforcing one open session per (client, parking).
pub const ACTIVE_OCCUPANCY_INDEX: &str = "uq_client_parkings_active";

/// Default upper bound on waiting for another transaction's lot lock.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors from entry and exit.
#[derive(Debug, thiserror::Error)]
pub enum OccupancyError {
    /// A rule or lookup failed; nothing was written.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store failed or gave up waiting; nothing was written.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl OccupancyError {
    /// Whether the same request may succeed if retried later.
    pub fn is_retryable(&self) -> bool {
        match self {
            OccupancyError::Database(err) => sqlstate::is_retryable(err),
            OccupancyError::Core(_) => false,
        }
    }
}

/// Entry/exit coordinator. Cheap to clone; holds no connection.
#[derive(Debug, Clone)]
pub struct OccupancyManager {
    lock_timeout: Duration,
}

impl Default for OccupancyManager {
    fn default() -> Self {
        Self::new(DEFAULT_LOCK_TIMEOUT)
    }
}

impl OccupancyManager {
    pub fn new(lock_timeout: Duration) -> Self {
        Self { lock_timeout }
    }

    pub fn lock_timeout(&self) -> Duration {
        self.lock_timeout
    }

    /// Park `client_id` at `parking_id` in a transaction of its own.
    pub async fn enter(
        &self,
        pool: &PgPool,
        client_id: DbId,
        parking_id: DbId,
    ) -> Result<Occupancy, OccupancyError> {
        let mut tx = pool.begin().await?;
        let occupancy = self.enter_in(&mut tx, client_id, parking_id).await?;
        tx.commit().await?;
        Ok(occupancy)
    }

    /// Release `client_id` from `parking_id` in a transaction of its own.
    pub async fn exit(
        &self,
        pool: &PgPool,
        client_id: DbId,
        parking_id: DbId,
    ) -> Result<Occupancy, OccupancyError> {
        let mut tx = pool.begin().await?;
        let occupancy = self.exit_in(&mut tx, client_id, parking_id).await?;
        tx.commit().await?;
        Ok(occupancy)
    }

    /// Entry inside a caller-owned transaction.
    ///
    /// Preconditions are checked in order and the first failure is returned:
    /// client exists, lot exists, lot is open, lot has a free place, client
    /// has no open session at this lot. On success the lot counter is
    /// decremented and an open session inserted. The caller commits.
    pub async fn enter_in(
        &self,
        conn: &mut PgConnection,
        client_id: DbId,
        parking_id: DbId,
    ) -> Result<Occupancy, OccupancyError> {
        self.apply_lock_timeout(conn).await?;

        if !ClientRepo::exists(conn, client_id).await? {
            return Err(CoreError::NotFound {
                entity: "Client",
                id: client_id,
            }
            .into());
        }

        let lot = ParkingRepo::lock_for_update(conn, parking_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Parking",
                id: parking_id,
            })?;
        let capacity = lot.capacity();

        let has_active = OccupancyRepo::has_active(conn, client_id, parking_id).await?;
        occupancy::check_entry(&capacity, client_id, has_active)?;

        let available = match occupancy::next_available_after_entry(&capacity) {
            Ok(available) => available,
            Err(err) => {
                tracing::error!(
                    error = %err,
                    client_id,
                    parking_id,
                    count_places = capacity.count_places,
                    count_available_places = capacity.count_available_places,
                    "Parking counter out of sync with sessions"
                );
                return Err(err.into());
            }
        };
        ParkingRepo::set_available_places(conn, parking_id, available).await?;

        let opened = OccupancyRepo::open(conn, client_id, parking_id)
            .await
            .map_err(|err| {
                if sqlstate::is_unique_violation_on(&err, ACTIVE_OCCUPANCY_INDEX) {
                    OccupancyError::Core(
                        EntryRefusal::AlreadyParked.into_error(client_id, parking_id),
                    )
                } else {
                    OccupancyError::Database(err)
                }
            })?;

        tracing::info!(
            occupancy_id = opened.id,
            client_id,
            parking_id,
            available,
            "Client entered parking"
        );
        Ok(opened)
    }

    /// Exit inside a caller-owned transaction.
    ///
    /// Closes the earliest open session for the pair and increments the lot
    /// counter. Additional open sessions are left untouched and logged. An
    /// increment past `count_places` fails with [`CoreError::Integrity`].
    pub async fn exit_in(
        &self,
        conn: &mut PgConnection,
        client_id: DbId,
        parking_id: DbId,
    ) -> Result<Occupancy, OccupancyError> {
        self.apply_lock_timeout(conn).await?;

        let lot = ParkingRepo::lock_for_update(conn, parking_id).await?;
        let active = OccupancyRepo::lock_active(conn, client_id, parking_id).await?;

        let Some(target) =
            occupancy::select_occupancy_to_close(&active, |o| (o.entry_time, o.id))
        else {
            return Err(CoreError::NoActiveOccupancy {
                client_id,
                parking_id,
            }
            .into());
        };
        let target_id = target.id;

        if active.len() > 1 {
            tracing::warn!(
                client_id,
                parking_id,
                active_count = active.len(),
                closing = target_id,
                "Multiple open sessions for one client and parking, closing the earliest"
            );
        }

        let lot = lot.ok_or(CoreError::NotFound {
            entity: "Parking",
            id: parking_id,
        })?;

        let available = match occupancy::next_available_after_exit(&lot.capacity()) {
            Ok(available) => available,
            Err(err) => {
                tracing::error!(
                    error = %err,
                    client_id,
                    parking_id,
                    count_places = lot.count_places,
                    count_available_places = lot.count_available_places,
                    "Parking counter out of sync with sessions"
                );
                return Err(err.into());
            }
        };

        let closed = OccupancyRepo::close(conn, target_id).await?.ok_or_else(|| {
            CoreError::Internal(format!("occupancy {target_id} was closed concurrently"))
        })?;
        ParkingRepo::set_available_places(conn, parking_id, available).await?;

        tracing::info!(
            occupancy_id = closed.id,
            client_id,
            parking_id,
            available,
            "Client left parking"
        );
        Ok(closed)
    }

    /// Limit lock waits for the rest of the current transaction.
    async fn apply_lock_timeout(&self, conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        let millis = self.lock_timeout.as_millis().max(1);
        sqlx::query("SELECT set_config('lock_timeout', $1, true)")
            .bind(format!("{millis}ms"))
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
