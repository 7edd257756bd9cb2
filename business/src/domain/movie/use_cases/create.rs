use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::model::Movie;
use crate::domain::movie::runtime::Runtime;

pub struct CreateMovieParams {
    pub title: String,
    pub year: i32,
    pub runtime: Runtime,
    pub genres: Option<Vec<String>>,
}

#[async_trait]
pub trait CreateMovieUseCase: Send + Sync {
    async fn execute(&self, params: CreateMovieParams) -> Result<Movie, MovieError>;
}
