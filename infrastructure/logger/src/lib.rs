pub mod tracing_logger;

pub use tracing_logger::TracingLogger;

use tracing_subscriber::EnvFilter;

/// Installs the process-wide JSON sink.
///
/// Records at INFO and above are written to stdout, one JSON object per line.
/// `RUST_LOG` overrides the default filter.
pub fn init_subscriber() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter)
        .with_current_span(false)
        .init();
}
