use chrono::{Datelike, Utc};

use crate::domain::validator::{Validator, unique};

use super::model::Movie;

pub const MAX_TITLE_BYTES: usize = 500;
/// Year of the earliest surviving motion picture.
pub const EARLIEST_RELEASE_YEAR: i32 = 1888;
pub const MIN_GENRES: usize = 1;
pub const MAX_GENRES: usize = 5;

/// Runs the movie checks against the current calendar year.
pub fn validate_movie(v: &mut Validator, movie: &Movie) {
    validate_movie_for_year(v, movie, Utc::now().year());
}

/// Runs the movie checks in order; the first failing check per field decides its message.
pub fn validate_movie_for_year(v: &mut Validator, movie: &Movie, current_year: i32) {
    v.check(!movie.title.is_empty(), "title", "must be provided");
    v.check(
        movie.title.len() <= MAX_TITLE_BYTES,
        "title",
        "must not be more than 500 bytes long",
    );

    v.check(movie.year != 0, "year", "must be provided");
    v.check(
        movie.year >= EARLIEST_RELEASE_YEAR,
        "year",
        "must be greater than 1888",
    );
    v.check(movie.year <= current_year, "year", "must not be in the future");

    let runtime = movie.runtime.minutes();
    v.check(runtime != 0, "runtime", "must be provided");
    v.check(runtime > 0, "runtime", "must be a positive integer");

    let genres = movie.genres.as_deref().unwrap_or_default();
    v.check(movie.genres.is_some(), "genres", "must be provided");
    v.check(
        genres.len() >= MIN_GENRES,
        "genres",
        "must contain at least 1 genre",
    );
    v.check(
        genres.len() <= MAX_GENRES,
        "genres",
        "must not contain more than 5 genres",
    );
    v.check(unique(genres), "genres", "must not contain duplicate values");
}
