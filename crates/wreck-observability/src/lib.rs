//! # wreck-observability
//!
//! Bridges `wreck` error attributes into structured logging.
//!
//! ## Logging
//! [`init_tracing`] installs a `tracing-subscriber` stack from a
//! [`LogConfig`] (text or JSON output, per-component levels).
//! [`log_error`] emits one event per error, carrying the diagnostic string,
//! the public message and the extracted attributes.
//!
//! ## OpenTelemetry
//! [`key_values`] converts the attributes of an error into
//! `opentelemetry::KeyValue`s for span attributes or metric labels. Groups
//! are flattened with dotted keys (`http.status`).

pub mod attributes;
pub mod error;
pub mod report;
pub mod tracing_setup;

pub use attributes::{flatten, key_values, Attributes};
pub use error::ObservabilityError;
pub use report::log_error;
pub use tracing_setup::{init_tracing, LogConfig};
