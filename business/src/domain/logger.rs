use std::collections::BTreeMap;

/// Key/value context attached to a log record.
pub type LogProperties = BTreeMap<String, String>;

/// Shared empty property set for records without context.
pub static NO_PROPERTIES: LogProperties = BTreeMap::new();

pub trait Logger: Send + Sync {
    fn info(&self, message: &str, properties: &LogProperties);
    fn warn(&self, message: &str, properties: &LogProperties);
    fn error(&self, message: &str, properties: &LogProperties);
    fn debug(&self, message: &str, properties: &LogProperties);
}

/// Builds a property set from literal pairs.
pub fn log_properties<const N: usize>(pairs: [(&str, String); N]) -> LogProperties {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
