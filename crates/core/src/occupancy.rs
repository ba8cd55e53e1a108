//! Entry/exit rules for parking occupancy.
//!
//! The functions here decide whether a client may enter or leave a lot and
//! compute the new `count_available_places` value. They operate on a
//! snapshot of the lot row taken while the caller holds the lot's row lock,
//! so a verdict stays valid until the caller commits.

use crate::error::CoreError;
use crate::types::{DbId, PlaceCount, Timestamp};

// ---------------------------------------------------------------------------
// Lot snapshot
// ---------------------------------------------------------------------------

/// The capacity-related columns of a parking lot row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotCapacity {
    pub parking_id: DbId,
    pub opened: bool,
    pub count_places: PlaceCount,
    pub count_available_places: PlaceCount,
}

impl LotCapacity {
    /// Whether the stored counters respect `0 <= available <= total`.
    pub fn is_consistent(&self) -> bool {
        self.count_places > 0
            && self.count_available_places >= 0
            && self.count_available_places <= self.count_places
    }
}

// ---------------------------------------------------------------------------
// Entry refusals
// ---------------------------------------------------------------------------

/// Business-rule reasons an entry is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRefusal {
    LotClosed,
    NoCapacity,
    AlreadyParked,
}

impl EntryRefusal {
    /// Stable machine-readable reason.
    pub fn code(self) -> &'static str {
        match self {
            EntryRefusal::LotClosed => "lot_closed",
            EntryRefusal::NoCapacity => "no_capacity",
            EntryRefusal::AlreadyParked => "already_parked",
        }
    }

    /// Convert into the conflict error returned to callers.
    pub fn into_error(self, client_id: DbId, parking_id: DbId) -> CoreError {
        let detail = match self {
            EntryRefusal::LotClosed => format!("parking {parking_id} is closed"),
            EntryRefusal::NoCapacity => format!("parking {parking_id} has no available places"),
            EntryRefusal::AlreadyParked => {
                format!("client {client_id} is already parked at parking {parking_id}")
            }
        };
        CoreError::Conflict(format!("{}: {detail}", self.code()))
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Decide whether `client_id` may enter the lot.
///
/// Checks run in a fixed order: closed lot, then capacity, then an existing
/// active occupancy for the same client. The first failing check wins.
pub fn check_entry(
    lot: &LotCapacity,
    client_id: DbId,
    has_active_occupancy: bool,
) -> Result<(), CoreError> {
    let refusal = if !lot.opened {
        Some(EntryRefusal::LotClosed)
    } else if lot.count_available_places <= 0 {
        Some(EntryRefusal::NoCapacity)
    } else if has_active_occupancy {
        Some(EntryRefusal::AlreadyParked)
    } else {
        None
    };

    match refusal {
        Some(r) => Err(r.into_error(client_id, lot.parking_id)),
        None => Ok(()),
    }
}

/// Available places after one client enters.
///
/// Callers must have passed [`check_entry`] first; a counter that is already
/// out of bounds is reported as an integrity violation instead of being
/// decremented further.
pub fn next_available_after_entry(lot: &LotCapacity) -> Result<PlaceCount, CoreError> {
    if !lot.is_consistent() || lot.count_available_places == 0 {
        return Err(CoreError::Integrity(format!(
            "parking {} cannot be decremented: available={} total={}",
            lot.parking_id, lot.count_available_places, lot.count_places
        )));
    }
    Ok(lot.count_available_places - 1)
}

/// Available places after one client leaves.
///
/// An increment that would push the counter above `count_places` means the
/// counter and the occupancy records disagree. That is reported, never
/// clamped.
pub fn next_available_after_exit(lot: &LotCapacity) -> Result<PlaceCount, CoreError> {
    if !lot.is_consistent() || lot.count_available_places >= lot.count_places {
        return Err(CoreError::Integrity(format!(
            "parking {} available places would exceed total: available={} total={}",
            lot.parking_id, lot.count_available_places, lot.count_places
        )));
    }
    Ok(lot.count_available_places + 1)
}

/// Pick the active occupancy an exit closes.
///
/// With more than one active row for the same pair, the earliest
/// `entry_time` wins, ties broken by the lowest id.
pub fn select_occupancy_to_close<T, F>(active: &[T], key: F) -> Option<&T>
where
    F: Fn(&T) -> (Timestamp, DbId),
{
    active.iter().min_by_key(|row| key(row))
}
