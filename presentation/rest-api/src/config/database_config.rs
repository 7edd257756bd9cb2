use clap::Args;
use persistence::db::{DatabaseConfig, DatabaseError};

#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL DSN
    #[arg(long = "db-dsn", env = "MOVIES_DB_DSN", default_value = "", hide_env_values = true)]
    pub dsn: String,

    /// PostgreSQL max open connections (zero or negative means unlimited)
    #[arg(
        long = "db-max-open-conns",
        env = "MOVIES_DB_MAX_OPEN_CONNS",
        default_value_t = 25,
        allow_negative_numbers = true
    )]
    pub max_open_conns: i32,

    /// PostgreSQL max idle connections
    #[arg(
        long = "db-max-idle-conns",
        env = "MOVIES_DB_MAX_IDLE_CONNS",
        default_value_t = 25,
        allow_negative_numbers = true
    )]
    pub max_idle_conns: i32,

    /// PostgreSQL max connection idle time, e.g. "15m" or "1h 30m"
    #[arg(
        long = "db-max-idle-time",
        env = "MOVIES_DB_MAX_IDLE_TIME",
        default_value = "15m"
    )]
    pub max_idle_time: String,
}

impl TryFrom<DatabaseArgs> for DatabaseConfig {
    type Error = DatabaseError;

    fn try_from(args: DatabaseArgs) -> Result<Self, Self::Error> {
        DatabaseConfig::new(
            args.dsn,
            args.max_open_conns,
            args.max_idle_conns,
            &args.max_idle_time,
        )
    }
}
