use crate::domain::validator::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum MovieError {
    #[error("movie.validation_failed")]
    Validation(FieldErrors),
    #[error("movie.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
