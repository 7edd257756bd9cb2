use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use business::domain::logger::{Logger, NO_PROPERTIES, log_properties};
use config::{
    app_config::AppConfig,
    cli::{Cli, version_requested},
    version,
};
use logger::TracingLogger;
use persistence::db::open_pool;
use setup::{context::AppContext, dependency_injection::DependencyContainer};

/// REST API Entry Point
///
/// Resolves configuration, opens the database pool, wires dependencies, and
/// serves until interrupted. Layout:
/// - config/: Flags, environment fallbacks and the typed configuration
/// - setup/: Application context, dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables so flags can fall back to them
    dotenv().ok();

    // 2. --version stops before any flag or env value is parsed
    if version_requested(std::env::args_os()) {
        println!("{}", version::banner());
        return Ok(());
    }
    let cli = Cli::parse();

    // 3. Initialize structured logging with RUST_LOG env filter
    logger::init_subscriber();
    let logger = Arc::new(TracingLogger);

    // 4. Resolve typed configuration
    let config =
        AppConfig::resolve(cli).unwrap_or_else(|err| logger.fatal(&err.to_string(), &NO_PROPERTIES));

    // 5. Open and probe the database pool
    let pool = match open_pool(&config.db).await {
        Ok(pool) => pool,
        Err(err) => logger.fatal(&err.to_string(), &NO_PROPERTIES),
    };
    logger.info(
        "database connection pool established",
        &log_properties([
            ("max_open_conns", config.db.max_open_conns.to_string()),
            ("max_idle_conns", config.db.max_idle_conns.to_string()),
            ("max_idle_time", format!("{:?}", config.db.max_idle_time)),
        ]),
    );

    // 6. Wire dependencies
    let context = AppContext::new(config, logger.clone(), pool);
    logger.info(
        "mailer configured",
        &log_properties([
            ("endpoint", context.mailer.endpoint()),
            ("sender", context.mailer.sender().to_string()),
            ("authenticated", context.mailer.has_credentials().to_string()),
        ]),
    );
    logger.info(
        "rate limiter configured",
        &log_properties([
            ("enabled", context.config.limiter.enabled.to_string()),
            ("rps", context.config.limiter.rps.to_string()),
            ("burst", context.config.limiter.burst.to_string()),
        ]),
    );
    let container = DependencyContainer::new(&context);

    // 7. Run server; the pool is released on every exit path
    if let Err(err) = context.serve(container).await {
        logger.fatal(&err.to_string(), &NO_PROPERTIES);
    }

    Ok(())
}
