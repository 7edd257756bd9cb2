//! PostgreSQL adapters.
//!
//! The `movies` table is defined in `migrations/` and applied outside this
//! service, e.g. with `sqlx migrate run` or `psql -f`. Nothing here runs it.

pub mod db;
pub mod statistics;
pub mod movie {
    pub mod entity;
    pub mod repository;
}
