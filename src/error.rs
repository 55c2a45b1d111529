use serde::{Deserialize, Serialize};
use thiserror::Error;

use serde_json::Error as JsonError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ScanError {
    #[error("Unsupported source for {target}: {found}")]
    UnsupportedSource { target: String, found: String },
    #[error("Malformed graph id: {0}")]
    MalformedIdentifier(String),
    #[error("Malformed entity literal: {0}")]
    MalformedEntity(String),
    #[error("Malformed path literal: {0}")]
    MalformedPath(String),
    #[error("Expected a JSON value at offset {offset}")]
    MalformedValue { offset: usize },
    #[error("JSON value starting at offset {offset} is not terminated")]
    TruncatedValue { offset: usize },
    #[error("Literal ends at byte {consumed} but the source holds {len} bytes")]
    TrailingBytes { consumed: usize, len: usize },
    #[error("JSON value nests deeper than {limit} levels")]
    DepthLimit { limit: usize },
    #[error("Path holds more than {limit} elements")]
    PathLimit { limit: usize },
    #[error("Property decode error: {0}")]
    Properties(String),
    #[error("Consumer rejected entity: {0}")]
    Consumer(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScanError {
    /// True for errors raised by the literal grammar itself, as opposed to the source type, the
    /// configured limits, or the receiving consumer.
    pub fn is_grammar(&self) -> bool {
        matches!(
            self,
            ScanError::MalformedIdentifier(_)
                | ScanError::MalformedEntity(_)
                | ScanError::MalformedPath(_)
                | ScanError::MalformedValue { .. }
                | ScanError::TruncatedValue { .. }
                | ScanError::TrailingBytes { .. }
        )
    }
}

impl From<JsonError> for ScanError {
    fn from(src: JsonError) -> ScanError {
        ScanError::Properties(format!("JSON deserialization error: {src}"))
    }
}

impl From<toml::de::Error> for ScanError {
    fn from(src: toml::de::Error) -> ScanError {
        ScanError::Config(format!("Toml deserialization error: {src}"))
    }
}
