//! Error types for a3s-cron-descriptor

use thiserror::Error;

use crate::time::TimeComponent;

/// Errors that can occur while describing a cron expression
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Empty input or a field count outside 5..=7
    #[error("Malformed cron expression: {0}")]
    MalformedExpression(String),

    /// A seconds/minutes/hours value that is not an integer or is out of range
    #[error("Invalid {component} '{value}' in time of day")]
    InvalidTimeComponent {
        component: TimeComponent,
        value: String,
    },

    /// Invalid options or phrase catalog
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for descriptor operations
pub type Result<T> = std::result::Result<T, DescriptorError>;
