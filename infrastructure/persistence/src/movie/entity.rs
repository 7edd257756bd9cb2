use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::movie::model::Movie;
use business::domain::movie::runtime::Runtime;

#[derive(Debug, FromRow)]
pub struct MovieEntity {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub year: i32,
    pub runtime: i32,
    pub genres: Vec<String>,
    pub version: i32,
}

impl MovieEntity {
    pub fn into_domain(self) -> Movie {
        Movie::from_repository(
            self.id,
            self.created_at,
            self.title,
            self.year,
            Runtime::from_minutes(self.runtime),
            self.genres,
            self.version,
        )
    }
}

/// Columns assigned by the database on insert.
#[derive(Debug, FromRow)]
pub struct InsertedMovieRow {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub version: i32,
}
