use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgPool};
use thiserror::Error;

/// Upper bound on the startup liveness probe. Not configurable.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.invalid_idle_time: {value:?}: {source}")]
    InvalidIdleTime {
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("database.invalid_dsn: {0}")]
    InvalidDsn(#[source] sqlx::Error),
    #[error("database.probe_timeout: no response within {0:?}")]
    ProbeTimeout(Duration),
    #[error("database.connection_error: {0}")]
    ConnectionError(#[source] sqlx::Error),
}

/// Configuration for the database connection pool
#[derive(Clone)]
pub struct DatabaseConfig {
    pub dsn: String,
    /// Zero or negative means no limit
    pub max_open_conns: i32,
    /// Advisory ceiling on idle connections. sqlx has no such cap, so idle
    /// connections instead drain through `max_idle_time`.
    pub max_idle_conns: i32,
    /// Zero disables the idle timeout
    pub max_idle_time: Duration,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("dsn", &"[REDACTED]")
            .field("max_open_conns", &self.max_open_conns)
            .field("max_idle_conns", &self.max_idle_conns)
            .field("max_idle_time", &self.max_idle_time)
            .finish()
    }
}

impl DatabaseConfig {
    /// Builds the pool configuration, parsing the idle timeout (`"15m"`, `"1h 30m"`, `"90s"`).
    ///
    /// Nothing touches the network here; a malformed duration fails before any
    /// connection is attempted.
    pub fn new(
        dsn: String,
        max_open_conns: i32,
        max_idle_conns: i32,
        max_idle_time: &str,
    ) -> Result<Self, DatabaseError> {
        let max_idle_time = humantime::parse_duration(max_idle_time).map_err(|source| {
            DatabaseError::InvalidIdleTime {
                value: max_idle_time.to_string(),
                source,
            }
        })?;

        Ok(Self {
            dsn,
            max_open_conns,
            max_idle_conns,
            max_idle_time,
        })
    }

    pub fn max_connections(&self) -> u32 {
        u32::try_from(self.max_open_conns)
            .ok()
            .filter(|n| *n > 0)
            .unwrap_or(u32::MAX)
    }

    pub fn idle_timeout(&self) -> Option<Duration> {
        Some(self.max_idle_time).filter(|d| !d.is_zero())
    }
}

/// Opens the shared PostgreSQL pool and verifies it can reach the server.
///
/// The probe is bounded by [`PROBE_TIMEOUT`]. On any failure the pool is closed
/// and never handed out. No retries.
pub async fn open_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let connect_options =
        PgConnectOptions::from_str(&config.dsn).map_err(DatabaseError::InvalidDsn)?;

    let pool = pool_options(config).connect_lazy_with(connect_options);

    if let Err(err) = probe(&pool).await {
        pool.close().await;
        return Err(err);
    }

    Ok(pool)
}

/// No connection is ever held open as a floor, so the idle timeout can shrink
/// the pool back to zero.
fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections())
        .min_connections(0)
        .idle_timeout(config.idle_timeout())
        .acquire_timeout(PROBE_TIMEOUT)
}

async fn probe(pool: &PgPool) -> Result<(), DatabaseError> {
    let ping = async {
        let mut conn = pool.acquire().await?;
        conn.ping().await
    };

    tokio::time::timeout(PROBE_TIMEOUT, ping)
        .await
        .map_err(|_| DatabaseError::ProbeTimeout(PROBE_TIMEOUT))?
        .map_err(|err| match err {
            sqlx::Error::PoolTimedOut => DatabaseError::ProbeTimeout(PROBE_TIMEOUT),
            other => DatabaseError::ConnectionError(other),
        })
}
