pub mod app_config;
pub mod cli;
pub mod cors_config;
pub mod database_config;
pub mod error;
pub mod limiter_config;
pub mod server_config;
pub mod smtp_config;
pub mod version;
