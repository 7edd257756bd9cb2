use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::{Logger, log_properties};
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::model::Movie;
use crate::domain::movie::repository::MovieRepository;
use crate::domain::movie::use_cases::get_by_id::{GetMovieByIdParams, GetMovieByIdUseCase};

pub struct GetMovieByIdUseCaseImpl {
    pub repository: Arc<dyn MovieRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMovieByIdUseCase for GetMovieByIdUseCaseImpl {
    async fn execute(&self, params: GetMovieByIdParams) -> Result<Movie, MovieError> {
        // ids are assigned from 1 upwards
        if params.id < 1 {
            return Err(MovieError::NotFound);
        }

        self.logger.debug(
            "fetching movie",
            &log_properties([("id", params.id.to_string())]),
        );

        let movie = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MovieError::NotFound,
                other => MovieError::Repository(other),
            })?;

        Ok(movie)
    }
}
