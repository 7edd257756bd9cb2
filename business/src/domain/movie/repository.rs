use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Movie;

#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Stores a new movie and returns it with `id`, `created_at` and `version` assigned.
    async fn insert(&self, movie: &Movie) -> Result<Movie, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Movie, RepositoryError>;
}
