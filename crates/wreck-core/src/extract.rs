//! Attribute extraction.
//!
//! The first [`Error`] found in the wrapped-cause graph wins (see
//! [`crate::find`]). From there the kind chain is walked outwards and each
//! node's raw entries are appended: the found node's own entries first, then
//! its base's, and so on. The combined list is normalized in one pass, so
//! the most specific attributes come first.

use crate::attr::{normalize, Arg, Attr, Value};
use crate::chain::find;
use crate::error::Error;
use std::error::Error as StdError;
use std::iter;

/// Extract the attributes of the first [`Error`] in `err`.
///
/// Returns an empty list when there is no such error or it carries no
/// attributes.
pub fn attrs(err: &(dyn StdError + 'static)) -> Vec<Attr> {
    let Some(found) = find::<Error>(err) else {
        return Vec::new();
    };

    let raw: Vec<Arg> = iter::once(found)
        .chain(found.ancestors())
        .flat_map(|node| node.own_args().iter().cloned())
        .collect();

    normalize(raw)
}

/// Extract the attributes as a flat `key, value, key, value, …` list.
pub fn args(err: &(dyn StdError + 'static)) -> Vec<Arg> {
    attrs(err)
        .into_iter()
        .flat_map(|attr| [Arg::Value(Value::Str(attr.key)), Arg::Value(attr.value)])
        .collect()
}

/// Look up the first attribute named `key`.
pub fn value(err: &(dyn StdError + 'static), key: &str) -> Option<Value> {
    attrs(err)
        .into_iter()
        .find(|attr| attr.key == key)
        .map(|attr| attr.value)
}
