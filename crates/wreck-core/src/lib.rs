//! wreck-core — errors with kinds, causes and structured attributes.
//!
//! This crate defines:
//! - [`Error`] — an immutable error node linked to the kind it was derived
//!   from and, optionally, to the cause it wraps
//! - [`Attr`] / [`Value`] / [`Arg`] — the attribute model
//! - [`attrs`], [`args`], [`value`] — attribute extraction for logging
//! - [`find`], [`is`], [`chain`] — traversal of wrapped causes
//!
//! # Quick Start
//!
//! ```rust
//! use std::io;
//! use wreck_core::{args, value, Error, Value};
//!
//! let not_found = Error::new("not found");
//! let user_not_found = not_found.with(args!["resource", "user"]);
//!
//! let err = user_not_found.wrap(
//!     "lookup failed",
//!     [io::Error::new(io::ErrorKind::Other, "disk offline")],
//! );
//!
//! assert!(wreck_core::is(&err, &not_found));
//! assert_eq!(err.message(), "lookup failed");
//! assert_eq!(err.to_string(), "lookup failed: disk offline");
//! assert_eq!(value(&err, "resource"), Some(Value::from("user")));
//! ```

pub mod attr;
pub mod chain;
pub mod error;
pub mod extract;

pub use attr::{Arg, Attr, Value, BAD_KEY};
pub use chain::{chain, find, is, Chain};
pub use error::{Ancestors, BoxError, Cause, Error, Joined};
pub use extract::{args, attrs, value};

/// Build a `Vec<Arg>` from mixed keys, values and [`Attr`]s.
///
/// ```rust
/// use wreck_core::{args, Attr, Error};
///
/// let kind = Error::new("quota exceeded").with(args!["tenant", "acme", Attr::uint("limit", 10)]);
/// assert_eq!(kind.own_args().len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),+]
    };
}
