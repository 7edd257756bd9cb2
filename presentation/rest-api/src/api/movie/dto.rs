use poem_openapi::Object;

use business::domain::movie::model::Movie;

#[derive(Debug, Clone, Object)]
pub struct CreateMovieRequest {
    #[oai(default)]
    pub title: String,
    #[oai(default)]
    pub year: i32,
    /// Runtime in the form "<minutes> mins", e.g. "102 mins"
    pub runtime: Option<String>,
    /// Between 1 and 5 distinct genres
    pub genres: Option<Vec<String>>,
}

#[derive(Debug, Clone, Object)]
pub struct MovieResponse {
    pub id: i64,
    pub title: String,
    #[oai(skip_serializing_if_is_none)]
    pub year: Option<i32>,
    /// Runtime in the form "<minutes> mins"
    #[oai(skip_serializing_if_is_none)]
    pub runtime: Option<String>,
    #[oai(skip_serializing_if_is_empty)]
    pub genres: Vec<String>,
    /// Incremented on every update
    pub version: i32,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            year: Some(movie.year).filter(|year| *year != 0),
            runtime: (!movie.runtime.is_zero()).then(|| movie.runtime.to_string()),
            genres: movie.genres.unwrap_or_default(),
            version: movie.version,
        }
    }
}
