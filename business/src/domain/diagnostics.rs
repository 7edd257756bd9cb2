/// Point-in-time view of the shared connection pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Configured ceiling on open connections
    pub max_open_connections: u32,
    /// Connections currently open, in use or idle
    pub open_connections: u32,
    pub in_use: u32,
    pub idle: u32,
}

/// Read-only access to live pool statistics.
pub trait PoolStatistics: Send + Sync {
    fn stats(&self) -> PoolStats;
}
