use std::sync::Arc;

use business::domain::diagnostics::{PoolStatistics, PoolStats};
use chrono::Utc;

use crate::config::version::VERSION;

/// Point-in-time view of the running process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsSnapshot {
    pub version: &'static str,
    pub workers: u64,
    pub database: PoolStats,
    /// Unix seconds
    pub timestamp: i64,
}

/// Reads live process figures through injected accessors instead of globals.
#[derive(Clone)]
pub struct Diagnostics {
    pool: Arc<dyn PoolStatistics>,
}

impl Diagnostics {
    pub fn new(pool: Arc<dyn PoolStatistics>) -> Self {
        Self { pool }
    }

    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        DiagnosticsSnapshot {
            version: VERSION,
            workers: runtime_workers(),
            database: self.pool.stats(),
            timestamp: Utc::now().timestamp(),
        }
    }
}

fn runtime_workers() -> u64 {
    tokio::runtime::Handle::try_current()
        .map(|handle| handle.metrics().num_workers())
        .ok()
        .and_then(|n| u64::try_from(n).ok())
        .unwrap_or(0)
}
