use chrono::{DateTime, Utc};

use super::runtime::Runtime;

/// A catalog entry.
///
/// Built from untrusted input and only checked by the movie rule set, so a
/// `Movie` value is not guaranteed to be valid. `genres` is `None` when the
/// client did not send a list at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub year: i32,
    pub runtime: Runtime,
    pub genres: Option<Vec<String>>,
    pub version: i32,
}

pub struct NewMovieProps {
    pub title: String,
    pub year: i32,
    pub runtime: Runtime,
    pub genres: Option<Vec<String>>,
}

impl Movie {
    /// Candidate that has not been persisted yet; `id` and `version` stay at zero
    /// until the repository assigns them.
    pub fn new(props: NewMovieProps) -> Self {
        Self {
            id: 0,
            created_at: Utc::now(),
            title: props.title,
            year: props.year,
            runtime: props.runtime,
            genres: props.genres,
            version: 0,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        created_at: DateTime<Utc>,
        title: String,
        year: i32,
        runtime: Runtime,
        genres: Vec<String>,
        version: i32,
    ) -> Self {
        Self {
            id,
            created_at,
            title,
            year,
            runtime,
            genres: Some(genres),
            version,
        }
    }

    /// Applies the server-assigned columns returned by an insert.
    pub fn persisted(self, id: i64, created_at: DateTime<Utc>, version: i32) -> Self {
        Self {
            id,
            created_at,
            version,
            ..self
        }
    }
}
