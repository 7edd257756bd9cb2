use persistence::db::DatabaseConfig;

use super::cli::Cli;
use super::cors_config::CorsConfig;
use super::error::ConfigError;
use super::limiter_config::LimiterConfig;
use super::server_config::ServerConfig;
use super::smtp_config::SmtpConfig;

/// Fully typed configuration, immutable once resolved.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub db: DatabaseConfig,
    pub limiter: LimiterConfig,
    pub smtp: SmtpConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Converts raw flag values in a single pass.
    pub fn resolve(cli: Cli) -> Result<Self, ConfigError> {
        Ok(Self {
            server: cli.server.into(),
            db: DatabaseConfig::try_from(cli.db)?,
            limiter: cli.limiter.into(),
            smtp: cli.smtp.into(),
            cors: cli.cors.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::time::Duration;

    fn resolve(args: &[&str]) -> Result<AppConfig, ConfigError> {
        let argv = std::iter::once("movies-api").chain(args.iter().copied());
        AppConfig::resolve(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn should_resolve_defaults_without_flags() {
        let config = resolve(&[]).unwrap();

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.env, "development");
        assert_eq!(config.db.dsn, "");
        assert_eq!(config.db.max_open_conns, 25);
        assert_eq!(config.db.max_idle_conns, 25);
        assert_eq!(config.db.max_idle_time, Duration::from_secs(15 * 60));
        assert_eq!(
            config.limiter,
            LimiterConfig {
                rps: 2.0,
                burst: 4,
                enabled: true
            }
        );
        assert_eq!(config.smtp.host, "smtp.mailtrap.io");
        assert_eq!(config.smtp.port, 2525);
        assert_eq!(config.smtp.username, "");
        assert_eq!(config.smtp.password, "");
        assert_eq!(config.smtp.sender, "Movies API <no-reply@movies.local>");
        assert!(config.cors.trusted_origins.is_empty());
    }

    #[test]
    fn should_resolve_nested_values_from_flags() {
        let config = resolve(&[
            "--port",
            "9000",
            "--db-max-idle-time",
            "90s",
            "--limiter-enabled",
            "false",
            "--cors-trusted-origins",
            "http://localhost:9000 http://localhost:9001",
        ])
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.db.max_idle_time, Duration::from_secs(90));
        assert!(!config.limiter.enabled);
        assert_eq!(config.cors.trusted_origins.len(), 2);
    }

    #[test]
    fn should_fail_on_malformed_idle_time() {
        let result = resolve(&["--db-max-idle-time", "fifteen minutes-ish"]);

        assert!(matches!(result, Err(ConfigError::Database(_))));
    }
}
