use std::time::Duration;

use business::domain::logger::log_properties;
use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::config::{cors_config, version::VERSION};
use crate::setup::{context::AppContext, dependency_injection::DependencyContainer};

/// In-flight requests get this long to finish after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

pub struct Server;

impl Server {
    pub async fn run(context: &AppContext, container: DependencyContainer) -> anyhow::Result<()> {
        let config = &context.config;
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.movie_api,
                container.diagnostics_api,
            ),
            "Movies API",
            VERSION,
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with_if(config.cors.enabled(), cors_config::init_cors(&config.cors))
            .with(Tracing);

        context.logger.info(
            "starting server",
            &log_properties([
                ("addr", addr.clone()),
                ("env", config.server.env.clone()),
                ("docs", format!("http://{}/docs", addr)),
            ]),
        );

        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(app, shutdown_signal(), Some(SHUTDOWN_GRACE))
            .await?;

        context.logger.info(
            "stopped server",
            &log_properties([("addr", addr)]),
        );
        Ok(())
    }
}

async fn shutdown_signal() {
    // An unavailable signal handler only means we never stop on ctrl-c.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
