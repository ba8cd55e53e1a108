use std::sync::Arc;

use parklot_db::occupancy::OccupancyManager;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: parklot_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Sole writer of lot counters and occupancy sessions.
    pub occupancy: OccupancyManager,
}

impl AppState {
    pub fn new(pool: parklot_db::DbPool, config: ServerConfig) -> Self {
        let occupancy = OccupancyManager::new(config.occupancy_lock_timeout());
        Self {
            pool,
            config: Arc::new(config),
            occupancy,
        }
    }
}
