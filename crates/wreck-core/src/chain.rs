//! Traversal of wrapped causes.
//!
//! Causes are reached through [`std::error::Error::source`] and, for a
//! [`Joined`] aggregate, through each member in order. Kind chains are never
//! walked here except by [`is`], which asks each visited [`Error`] about its
//! own kinds.

use crate::error::{Error, Joined};
use std::error::Error as StdError;

/// Find the first error of type `T` in `err` or anything it wraps.
///
/// The search is depth-first: `err` itself, then every member of a
/// [`Joined`] (each fully searched before the next), otherwise `source()`.
pub fn find<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    if let Some(found) = err.downcast_ref::<T>() {
        return Some(found);
    }
    if let Some(joined) = err.downcast_ref::<Joined>() {
        return joined.errors().find_map(|member| find::<T>(member));
    }
    err.source().and_then(|source| find::<T>(source))
}

/// Reports whether `err`, or anything it wraps, is `target` or an error
/// derived from it.
pub fn is(err: &(dyn StdError + 'static), target: &Error) -> bool {
    if let Some(e) = err.downcast_ref::<Error>() {
        if e == target || e.is(target) {
            return true;
        }
    }
    if let Some(joined) = err.downcast_ref::<Joined>() {
        return joined.errors().any(|member| is(member, target));
    }
    err.source().map_or(false, |source| is(source, target))
}

/// Iterate `err` and its `source()` chain.
///
/// A [`Joined`] ends the chain since it has no single source.
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Iterator returned by [`chain`].
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}
