use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::movie::model::Movie;
use business::domain::movie::repository::MovieRepository;

use super::entity::{InsertedMovieRow, MovieEntity};

pub struct MovieRepositoryPostgres {
    pool: PgPool,
}

impl MovieRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for MovieRepositoryPostgres {
    async fn insert(&self, movie: &Movie) -> Result<Movie, RepositoryError> {
        let row = sqlx::query_as::<_, InsertedMovieRow>(
            r#"INSERT INTO movies (title, year, runtime, genres)
            VALUES ($1, $2, $3, $4)
            RETURNING id, created_at, version"#,
        )
        .bind(&movie.title)
        .bind(movie.year)
        .bind(movie.runtime.minutes())
        .bind(movie.genres.as_deref().unwrap_or_default())
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(movie.clone().persisted(row.id, row.created_at, row.version))
    }

    async fn get_by_id(&self, id: i64) -> Result<Movie, RepositoryError> {
        let entity = sqlx::query_as::<_, MovieEntity>(
            "SELECT id, created_at, title, year, runtime, genres, version FROM movies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}

#[cfg(test)]
mod tests {
    const SCHEMA: &str = include_str!("../../migrations/20260101000000_create_movies_table.sql");

    #[test]
    fn should_apply_schema_more_than_once() {
        assert!(SCHEMA.starts_with("CREATE TABLE IF NOT EXISTS movies"));
        assert!(!SCHEMA.contains("ALTER TABLE"));
    }

    #[test]
    fn should_define_every_column_the_repository_reads() {
        for column in ["id", "created_at", "title", "year", "runtime", "genres", "version"] {
            assert!(
                SCHEMA.contains(&format!("\n    {column} ")),
                "{column} missing from schema"
            );
        }
    }
}
