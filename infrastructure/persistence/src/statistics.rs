use sqlx::PgPool;

use business::domain::diagnostics::{PoolStatistics, PoolStats};

pub struct PoolStatisticsPostgres {
    pool: PgPool,
}

impl PoolStatisticsPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PoolStatistics for PoolStatisticsPostgres {
    fn stats(&self) -> PoolStats {
        let open_connections = self.pool.size();
        let idle = u32::try_from(self.pool.num_idle()).unwrap_or(u32::MAX);

        PoolStats {
            max_open_connections: self.pool.options().get_max_connections(),
            open_connections,
            in_use: open_connections.saturating_sub(idle),
            idle,
        }
    }
}
