//! Error types for logging initialisation.

use thiserror::Error;

/// Errors that can occur while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Invalid log filter '{directives}': {source}")]
    InvalidFilter {
        directives: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Invalid log config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Tracing subscriber already installed: {0}")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}
