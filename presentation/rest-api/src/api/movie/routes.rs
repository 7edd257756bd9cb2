use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::movie::errors::MovieError;
use business::domain::movie::runtime::Runtime;
use business::domain::movie::use_cases::create::{CreateMovieParams, CreateMovieUseCase};
use business::domain::movie::use_cases::get_by_id::{GetMovieByIdParams, GetMovieByIdUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, ValidationErrorResponse};
use crate::api::movie::dto::{CreateMovieRequest, MovieResponse};
use crate::api::tags::ApiTags;

pub struct MovieApi {
    create_use_case: Arc<dyn CreateMovieUseCase>,
    get_by_id_use_case: Arc<dyn GetMovieByIdUseCase>,
}

impl MovieApi {
    pub fn new(
        create_use_case: Arc<dyn CreateMovieUseCase>,
        get_by_id_use_case: Arc<dyn GetMovieByIdUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_id_use_case,
        }
    }
}

/// Movie catalog API
#[OpenApi]
impl MovieApi {
    /// Create a new movie
    ///
    /// Validates the movie and stores it. Every failing field is reported with
    /// the first rule it broke.
    #[oai(path = "/v1/movies", method = "post", tag = "ApiTags::Movies")]
    async fn create_movie(&self, body: Json<CreateMovieRequest>) -> CreateMovieResponse {
        let request = body.0;

        let runtime = match request.runtime.as_deref().map(str::parse::<Runtime>) {
            None => Runtime::default(),
            Some(Ok(runtime)) => runtime,
            Some(Err(err)) => {
                let (_status, json) = err.into_error_response();
                return CreateMovieResponse::BadRequest(json);
            }
        };

        let params = CreateMovieParams {
            title: request.title,
            year: request.year,
            runtime,
            genres: request.genres,
        };

        match self.create_use_case.execute(params).await {
            Ok(movie) => CreateMovieResponse::Created(Json(movie.into())),
            Err(MovieError::Validation(errors)) => {
                CreateMovieResponse::UnprocessableEntity(Json(ValidationErrorResponse {
                    error: errors,
                }))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateMovieResponse::InternalError(json)
            }
        }
    }

    /// Get a movie by ID
    #[oai(path = "/v1/movies/:id", method = "get", tag = "ApiTags::Movies")]
    async fn show_movie(&self, id: Path<String>) -> ShowMovieResponse {
        let Ok(id) = id.0.parse::<i64>() else {
            let (_status, json) = MovieError::NotFound.into_error_response();
            return ShowMovieResponse::NotFound(json);
        };

        match self
            .get_by_id_use_case
            .execute(GetMovieByIdParams { id })
            .await
        {
            Ok(movie) => ShowMovieResponse::Ok(Json(movie.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ShowMovieResponse::NotFound(json),
                    _ => ShowMovieResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateMovieResponse {
    #[oai(status = 201)]
    Created(Json<MovieResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ValidationErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ShowMovieResponse {
    #[oai(status = 200)]
    Ok(Json<MovieResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::application::movie::create::CreateMovieUseCaseImpl;
    use business::application::movie::get_by_id::GetMovieByIdUseCaseImpl;
    use business::domain::errors::RepositoryError;
    use business::domain::logger::{LogProperties, Logger};
    use business::domain::movie::model::Movie;
    use business::domain::movie::repository::MovieRepository;
    use chrono::Utc;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    struct SilentLogger;

    impl Logger for SilentLogger {
        fn info(&self, _message: &str, _properties: &LogProperties) {}
        fn warn(&self, _message: &str, _properties: &LogProperties) {}
        fn error(&self, _message: &str, _properties: &LogProperties) {}
        fn debug(&self, _message: &str, _properties: &LogProperties) {}
    }

    /// Holds exactly one movie, with id 1.
    struct SingleMovieRepository {
        fail_inserts: bool,
    }

    #[async_trait]
    impl MovieRepository for SingleMovieRepository {
        async fn insert(&self, movie: &Movie) -> Result<Movie, RepositoryError> {
            if self.fail_inserts {
                return Err(RepositoryError::DatabaseError);
            }
            Ok(movie.clone().persisted(1, Utc::now(), 1))
        }

        async fn get_by_id(&self, id: i64) -> Result<Movie, RepositoryError> {
            if id != 1 {
                return Err(RepositoryError::NotFound);
            }
            Ok(Movie::from_repository(
                1,
                Utc::now(),
                "Moana".to_string(),
                2016,
                Runtime::from_minutes(107),
                vec!["animation".to_string(), "adventure".to_string()],
                1,
            ))
        }
    }

    fn client(fail_inserts: bool) -> TestClient<Route> {
        let repository = Arc::new(SingleMovieRepository { fail_inserts });
        let logger: Arc<dyn Logger> = Arc::new(SilentLogger);
        let api = MovieApi::new(
            Arc::new(CreateMovieUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetMovieByIdUseCaseImpl { repository, logger }),
        );
        TestClient::new(Route::new().nest("/", OpenApiService::new(api, "test", "1.0")))
    }

    #[tokio::test]
    async fn should_create_movie() {
        let response = client(false)
            .post("/v1/movies")
            .body_json(&json!({
                "title": "Moana",
                "year": 2016,
                "runtime": "107 mins",
                "genres": ["animation", "adventure"],
            }))
            .send()
            .await;

        response.assert_status(StatusCode::CREATED);
        response
            .assert_json(json!({
                "id": 1,
                "title": "Moana",
                "year": 2016,
                "runtime": "107 mins",
                "genres": ["animation", "adventure"],
                "version": 1,
            }))
            .await;
    }

    #[tokio::test]
    async fn should_reject_malformed_runtime_with_bad_request() {
        let response = client(false)
            .post("/v1/movies")
            .body_json(&json!({
                "title": "Moana",
                "year": 2016,
                "runtime": "107 minutes",
                "genres": ["animation"],
            }))
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response
            .assert_json(json!({
                "name": "BadRequest",
                "message": "movie.invalid_runtime_format",
            }))
            .await;
    }

    #[tokio::test]
    async fn should_report_every_failing_field() {
        let response = client(false)
            .post("/v1/movies")
            .body_json(&json!({
                "title": "",
                "year": 1500,
                "runtime": "-5 mins",
                "genres": ["drama", "drama"],
            }))
            .send()
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response
            .assert_json(json!({
                "error": {
                    "title": "must be provided",
                    "year": "must be greater than 1888",
                    "runtime": "must be a positive integer",
                    "genres": "must not contain duplicate values",
                }
            }))
            .await;
    }

    #[tokio::test]
    async fn should_treat_missing_fields_as_unset() {
        let response = client(false)
            .post("/v1/movies")
            .body_json(&json!({}))
            .send()
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response
            .assert_json(json!({
                "error": {
                    "title": "must be provided",
                    "year": "must be provided",
                    "runtime": "must be provided",
                    "genres": "must be provided",
                }
            }))
            .await;
    }

    #[tokio::test]
    async fn should_hide_repository_failures() {
        let response = client(true)
            .post("/v1/movies")
            .body_json(&json!({
                "title": "Moana",
                "year": 2016,
                "runtime": "107 mins",
                "genres": ["animation"],
            }))
            .send()
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn should_show_existing_movie() {
        let response = client(false).get("/v1/movies/1").send().await;

        response.assert_status(StatusCode::OK);
        response
            .assert_json(json!({
                "id": 1,
                "title": "Moana",
                "year": 2016,
                "runtime": "107 mins",
                "genres": ["animation", "adventure"],
                "version": 1,
            }))
            .await;
    }

    #[tokio::test]
    async fn should_return_not_found_for_unusable_ids() {
        let client = client(false);

        for id in ["abc", "0", "-3", "42", "1.5"] {
            let response = client.get(format!("/v1/movies/{id}")).send().await;
            response.assert_status(StatusCode::NOT_FOUND);
        }
    }
}
