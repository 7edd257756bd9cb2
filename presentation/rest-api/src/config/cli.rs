use std::ffi::OsStr;

use clap::Parser;

use super::cors_config::CorsArgs;
use super::database_config::DatabaseArgs;
use super::limiter_config::LimiterArgs;
use super::server_config::ServerArgs;
use super::smtp_config::SmtpArgs;

/// Command-line flags. Every flag falls back to a `MOVIES_*` environment variable.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "movies-api",
    about = "Movie catalog REST API",
    disable_version_flag = true
)]
pub struct Cli {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub limiter: LimiterArgs,

    #[command(flatten)]
    pub smtp: SmtpArgs,

    #[command(flatten)]
    pub cors: CorsArgs,

    /// Display version and build time, then exit
    #[arg(long)]
    pub version: bool,
}

/// True when `--version` appears before any `--` terminator.
///
/// Runs on the raw arguments ahead of [`Cli`] parsing, so a malformed flag or
/// `MOVIES_*` value cannot stop the banner from printing.
pub fn version_requested<I, T>(args: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
{
    for arg in args.into_iter().skip(1) {
        match arg.as_ref().to_str() {
            Some("--") => return false,
            Some("--version") => return true,
            _ => {}
        }
    }
    false
}
