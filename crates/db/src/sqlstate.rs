//! PostgreSQL SQLSTATE codes the service reacts to.

pub const UNIQUE_VIOLATION: &str = "23505";
pub const CHECK_VIOLATION: &str = "23514";
pub const FOREIGN_KEY_VIOLATION: &str = "23503";
pub const SERIALIZATION_FAILURE: &str = "40001";
pub const DEADLOCK_DETECTED: &str = "40P01";
pub const LOCK_NOT_AVAILABLE: &str = "55P03";

/// The SQLSTATE of a database error, if any.
pub fn code_of(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

/// Whether retrying the same request later may succeed.
///
/// Covers lock waits cut short by `lock_timeout`, serialization failures,
/// deadlock victims and an exhausted connection pool.
pub fn is_retryable(err: &sqlx::Error) -> bool {
    if matches!(err, sqlx::Error::PoolTimedOut) {
        return true;
    }
    matches!(
        code_of(err).as_deref(),
        Some(LOCK_NOT_AVAILABLE | SERIALIZATION_FAILURE | DEADLOCK_DETECTED)
    )
}

/// Whether the error is a unique violation on the named constraint or index.
pub fn is_unique_violation_on(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}
