use poem_openapi::Object;

use business::domain::diagnostics::PoolStats;

use crate::setup::diagnostics::DiagnosticsSnapshot;

#[derive(Debug, Clone, Object)]
pub struct DatabaseStatsResponse {
    pub max_open_connections: u32,
    pub open_connections: u32,
    pub in_use: u32,
    pub idle: u32,
}

impl From<PoolStats> for DatabaseStatsResponse {
    fn from(stats: PoolStats) -> Self {
        Self {
            max_open_connections: stats.max_open_connections,
            open_connections: stats.open_connections,
            in_use: stats.in_use,
            idle: stats.idle,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DiagnosticsResponse {
    pub version: String,
    /// Async runtime worker threads
    pub workers: u64,
    pub database: DatabaseStatsResponse,
    /// Unix seconds when the snapshot was taken
    pub timestamp: i64,
}

impl From<DiagnosticsSnapshot> for DiagnosticsResponse {
    fn from(snapshot: DiagnosticsSnapshot) -> Self {
        Self {
            version: snapshot.version.to_string(),
            workers: snapshot.workers,
            database: snapshot.database.into(),
            timestamp: snapshot.timestamp,
        }
    }
}
