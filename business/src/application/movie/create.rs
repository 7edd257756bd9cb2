use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::{Logger, log_properties};
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::model::{Movie, NewMovieProps};
use crate::domain::movie::repository::MovieRepository;
use crate::domain::movie::rules::validate_movie;
use crate::domain::movie::use_cases::create::{CreateMovieParams, CreateMovieUseCase};
use crate::domain::validator::Validator;

pub struct CreateMovieUseCaseImpl {
    pub repository: Arc<dyn MovieRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateMovieUseCase for CreateMovieUseCaseImpl {
    async fn execute(&self, params: CreateMovieParams) -> Result<Movie, MovieError> {
        let movie = Movie::new(NewMovieProps {
            title: params.title,
            year: params.year,
            runtime: params.runtime,
            genres: params.genres,
        });

        let mut v = Validator::new();
        validate_movie(&mut v, &movie);
        if !v.valid() {
            let errors = v.into_errors();
            let fields = errors.keys().cloned().collect::<Vec<_>>().join(",");
            self.logger.info(
                "movie rejected by validation",
                &log_properties([("fields", fields)]),
            );
            return Err(MovieError::Validation(errors));
        }

        let movie = self.repository.insert(&movie).await?;

        self.logger.info(
            "movie created",
            &log_properties([("id", movie.id.to_string())]),
        );
        Ok(movie)
    }
}
