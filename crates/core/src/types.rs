//! Shared scalar aliases matching the database column types.

/// Primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Place counters (`count_places`, `count_available_places`) are INTEGER.
pub type PlaceCount = i32;

/// All timestamps are UTC (TIMESTAMPTZ).
pub type Timestamp = chrono::DateTime<chrono::Utc>;
