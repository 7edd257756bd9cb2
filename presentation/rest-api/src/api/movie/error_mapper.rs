use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::movie::errors::MovieError;
use business::domain::movie::runtime::RuntimeParseError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MovieError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            MovieError::Validation(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                "movie.validation_failed",
            ),
            MovieError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "movie.not_found"),
            MovieError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

impl IntoErrorResponse for RuntimeParseError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("BadRequest", &self.to_string())),
        )
    }
}
