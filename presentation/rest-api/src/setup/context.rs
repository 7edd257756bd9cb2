use std::sync::Arc;

use business::domain::logger::Logger;
use persistence::statistics::PoolStatisticsPostgres;
use sqlx::PgPool;

use crate::config::app_config::AppConfig;
use crate::setup::dependency_injection::DependencyContainer;
use crate::setup::diagnostics::Diagnostics;
use crate::setup::mailer::Mailer;
use crate::setup::server::Server;

/// Everything the handlers share for the lifetime of the process.
pub struct AppContext {
    pub config: AppConfig,
    pub logger: Arc<dyn Logger>,
    pub pool: PgPool,
    pub mailer: Mailer,
    pub diagnostics: Diagnostics,
}

impl AppContext {
    pub fn new(config: AppConfig, logger: Arc<dyn Logger>, pool: PgPool) -> Self {
        let mailer = Mailer::new(config.smtp.clone());
        let diagnostics = Diagnostics::new(Arc::new(PoolStatisticsPostgres::new(pool.clone())));

        Self {
            config,
            logger,
            pool,
            mailer,
            diagnostics,
        }
    }

    /// Serves until shutdown, then closes the pool whether or not serving failed.
    pub async fn serve(self, container: DependencyContainer) -> anyhow::Result<()> {
        let served = Server::run(&self, container).await;
        self.close().await;
        served
    }

    /// Closes the pool. Taking `self` means this can only happen once.
    pub async fn close(self) {
        self.pool.close().await;
    }
}
