pub mod context;
pub mod dependency_injection;
pub mod diagnostics;
pub mod mailer;
pub mod server;
