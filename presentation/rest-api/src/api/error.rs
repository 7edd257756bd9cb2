use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::validator::FieldErrors;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

/// Field name to the first failure recorded for it
#[derive(Object, Debug)]
pub struct ValidationErrorResponse {
    pub error: FieldErrors,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
