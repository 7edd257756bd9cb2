use persistence::db::DatabaseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config.database: {0}")]
    Database(#[from] DatabaseError),
}
