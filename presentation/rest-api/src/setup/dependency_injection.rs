use std::sync::Arc;

use persistence::movie::repository::MovieRepositoryPostgres;

use business::application::movie::create::CreateMovieUseCaseImpl;
use business::application::movie::get_by_id::GetMovieByIdUseCaseImpl;

use crate::api::diagnostics::routes::DiagnosticsApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::movie::routes::MovieApi;
use crate::setup::context::AppContext;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub movie_api: MovieApi,
    pub diagnostics_api: DiagnosticsApi,
}

impl DependencyContainer {
    pub fn new(context: &AppContext) -> Self {
        let logger = context.logger.clone();
        let health_api = HealthApi::new(context.config.server.env.clone());

        // Infrastructure adapters
        let movie_repository = Arc::new(MovieRepositoryPostgres::new(context.pool.clone()));

        // Movie use cases
        let create_use_case = Arc::new(CreateMovieUseCaseImpl {
            repository: movie_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetMovieByIdUseCaseImpl {
            repository: movie_repository,
            logger,
        });

        let movie_api = MovieApi::new(create_use_case, get_by_id_use_case);
        let diagnostics_api = DiagnosticsApi::new(context.diagnostics.clone());

        Self {
            health_api,
            movie_api,
            diagnostics_api,
        }
    }
}
