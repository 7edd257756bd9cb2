pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stamped by the release build through the `BUILD_TIME` environment variable.
pub fn build_time() -> &'static str {
    option_env!("BUILD_TIME").unwrap_or("unknown")
}

pub fn banner() -> String {
    format!("Version:\t{VERSION}\nBuild time:\t{}", build_time())
}
