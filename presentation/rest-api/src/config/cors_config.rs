use clap::Args;
use poem::middleware::Cors;

#[derive(Args, Debug, Clone)]
pub struct CorsArgs {
    /// Trusted CORS origins (space separated)
    #[arg(long = "cors-trusted-origins", env = "MOVIES_CORS_TRUSTED_ORIGINS")]
    pub trusted_origins: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub trusted_origins: Vec<String>,
}

impl From<CorsArgs> for CorsConfig {
    fn from(args: CorsArgs) -> Self {
        Self {
            trusted_origins: parse_trusted_origins(args.trusted_origins.as_deref()),
        }
    }
}

impl CorsConfig {
    pub fn enabled(&self) -> bool {
        !self.trusted_origins.is_empty()
    }
}

/// Splits on runs of whitespace. Absent or blank input yields no origins.
pub fn parse_trusted_origins(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Initialize CORS middleware for the trusted origins
///
/// Configuration:
/// - Methods: OPTIONS, PUT, PATCH, DELETE (plus simple requests)
/// - Headers: authorization, content-type
pub fn init_cors(config: &CorsConfig) -> Cors {
    Cors::new()
        .allow_origins(config.trusted_origins.iter().map(String::as_str))
        .allow_methods(vec!["GET", "POST", "OPTIONS", "PUT", "PATCH", "DELETE"])
        .allow_headers(vec!["authorization", "content-type"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_origins_on_whitespace_runs() {
        let origins =
            parse_trusted_origins(Some("  https://a.example\thttps://b.example   https://c.example "));

        assert_eq!(
            origins,
            vec![
                "https://a.example".to_string(),
                "https://b.example".to_string(),
                "https://c.example".to_string(),
            ]
        );
    }

    #[test]
    fn should_yield_no_origins_for_absent_or_blank_input() {
        assert!(parse_trusted_origins(None).is_empty());
        assert!(parse_trusted_origins(Some("")).is_empty());
        assert!(parse_trusted_origins(Some(" \t\n ")).is_empty());
    }

    #[test]
    fn should_be_disabled_without_origins() {
        let config = CorsConfig::from(CorsArgs {
            trusted_origins: Some("   ".to_string()),
        });

        assert!(!config.enabled());
    }
}
