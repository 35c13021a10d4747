//! Emitting errors as `tracing` events.

use crate::attributes::Attributes;
use std::error::Error as StdError;
use tracing::Level;
use wreck_core::{find, Error};

/// Log `err` at `level` with its attributes.
///
/// Fields:
/// - `error` — the diagnostic rendering, including wrapped causes
/// - `public_message` — the safe message of the first `wreck` error found
/// - `attrs` — the extracted attributes as `key=value` pairs
pub fn log_error(err: &(dyn StdError + 'static), level: Level) {
    let attrs = wreck_core::attrs(err);
    let attrs = Attributes(&attrs);
    let public_message = find::<Error>(err).map(Error::message);

    match level {
        Level::ERROR => tracing::error!(error = %err, public_message, attrs = %attrs),
        Level::WARN => tracing::warn!(error = %err, public_message, attrs = %attrs),
        Level::INFO => tracing::info!(error = %err, public_message, attrs = %attrs),
        Level::DEBUG => tracing::debug!(error = %err, public_message, attrs = %attrs),
        _ => tracing::trace!(error = %err, public_message, attrs = %attrs),
    }
}
