use std::backtrace::Backtrace;

use business::domain::logger::{LogProperties, Logger};
use tracing::{debug, error, info, warn};

const TARGET: &str = "movies";

pub struct TracingLogger;

/// Every record carries `severity`; FATAL is emitted at tracing's ERROR level,
/// so consumers filter on `severity` rather than `level`.
impl Logger for TracingLogger {
    fn info(&self, message: &str, properties: &LogProperties) {
        info!(target: TARGET, severity = "INFO", properties = ?properties, "{}", message);
    }
    fn warn(&self, message: &str, properties: &LogProperties) {
        warn!(target: TARGET, severity = "WARN", properties = ?properties, "{}", message);
    }
    fn error(&self, message: &str, properties: &LogProperties) {
        let trace = Backtrace::force_capture();
        error!(
            target: TARGET,
            severity = "ERROR",
            properties = ?properties,
            trace = %trace,
            "{}",
            message
        );
    }
    fn debug(&self, message: &str, properties: &LogProperties) {
        debug!(target: TARGET, severity = "DEBUG", properties = ?properties, "{}", message);
    }
}

impl TracingLogger {
    /// Writes a FATAL record with a stack trace, then exits with status 1.
    pub fn fatal(&self, message: &str, properties: &LogProperties) -> ! {
        self.fatal_record(message, properties);
        std::process::exit(1)
    }

    fn fatal_record(&self, message: &str, properties: &LogProperties) {
        let trace = Backtrace::force_capture();
        error!(
            target: TARGET,
            severity = "FATAL",
            properties = ?properties,
            trace = %trace,
            "{}",
            message
        );
    }
}
