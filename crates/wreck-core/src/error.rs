//! The [`Error`] node and its construction API.
//!
//! Every node carries two independent links:
//! - `base` — the "kind" this error was derived from. Walked by
//!   [`Error::is`] and by attribute extraction.
//! - `cause` — the underlying failure being wrapped. Exposed through
//!   [`std::error::Error::source`] and included in the rendered string.

use crate::attr::Arg;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// A boxed, thread-safe error trait object.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

// ─── Cause ────────────────────────────────────────────────────────────────────

/// A wrapped underlying error, shared between an error and the nodes derived
/// from it via [`Error::with`].
#[derive(Clone)]
pub struct Cause(Arc<dyn StdError + Send + Sync + 'static>);

impl Cause {
    /// Wrap an already-boxed error.
    pub fn from_boxed(err: BoxError) -> Self {
        Cause(Arc::from(err))
    }

    /// Share an error that is already behind an `Arc`.
    ///
    /// Prefer this over `Cause::from(arc)`: the blanket conversion wraps the
    /// `Arc` itself, and `Arc<E>` forwards `source()` past `E`, so
    /// [`crate::find`] would never see the inner error.
    pub fn from_arc(err: Arc<dyn StdError + Send + Sync + 'static>) -> Self {
        Cause(err)
    }

    pub fn as_error(&self) -> &(dyn StdError + 'static) {
        &*self.0
    }
}

impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Cause(Arc::new(err))
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

// ─── Joined ───────────────────────────────────────────────────────────────────

/// Several independent causes wrapped at once.
///
/// Renders as the causes' messages separated by newlines. `source()` is
/// always `None`; [`crate::find`] and [`crate::is`] descend into every member
/// instead.
#[derive(Debug, Clone)]
pub struct Joined {
    causes: Vec<Cause>,
}

impl Joined {
    /// The member causes in the order they were supplied.
    pub fn errors(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        self.causes.iter().map(Cause::as_error)
    }

    pub fn len(&self) -> usize {
        self.causes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }
}

impl fmt::Display for Joined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cause) in self.causes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{cause}")?;
        }
        Ok(())
    }
}

impl StdError for Joined {}

impl FromIterator<Cause> for Joined {
    fn from_iter<I: IntoIterator<Item = Cause>>(iter: I) -> Self {
        Joined {
            causes: iter.into_iter().collect(),
        }
    }
}

// ─── Error ────────────────────────────────────────────────────────────────────

/// An error with a kind chain, an optional cause and attributes.
///
/// Cloning is cheap and keeps identity: a clone compares equal to the
/// original and matches the same kinds.
#[derive(Clone)]
pub struct Error {
    node: Arc<Node>,
}

struct Node {
    base: Option<Error>,
    msg: String,
    cause: Option<Cause>,
    args: Vec<Arg>,
}

impl Error {
    /// Create a root error: no kind, no cause, no attributes.
    pub fn new(msg: impl Into<String>) -> Self {
        Self::from_node(Node {
            base: None,
            msg: msg.into(),
            cause: None,
            args: Vec::new(),
        })
    }

    /// Create an error of this kind with its own message and no cause.
    pub fn derive(&self, msg: impl Into<String>) -> Self {
        self.wrap(msg, std::iter::empty::<Cause>())
    }

    /// Create an error of this kind wrapping `causes`.
    ///
    /// No causes leaves the cause empty, one cause is stored as-is and
    /// several are combined into a [`Joined`]. Pass boxed or `Arc`-shared
    /// errors through [`Cause::from_boxed`] / [`Cause::from_arc`] so they stay
    /// reachable by [`crate::find`].
    pub fn wrap<I>(&self, msg: impl Into<String>, causes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cause>,
    {
        let mut causes: Vec<Cause> = causes.into_iter().map(Into::into).collect();
        let cause = match causes.len() {
            0 => None,
            1 => causes.pop(),
            _ => Some(Cause::from(Joined { causes })),
        };

        Self::from_node(Node {
            base: Some(self.clone()),
            msg: msg.into(),
            cause,
            args: Vec::new(),
        })
    }

    /// Derive a new kind carrying `args`, leaving `self` untouched.
    ///
    /// The result keeps this error's message and cause. Chained calls nest:
    /// `a.with(x).with(y)` has base `a.with(x)`, whose base is `a`.
    pub fn with<I>(&self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        Self::from_node(Node {
            base: Some(self.clone()),
            msg: self.node.msg.clone(),
            cause: self.node.cause.clone(),
            args: args.into_iter().map(Into::into).collect(),
        })
    }

    /// The public message, without any wrapped cause text.
    pub fn message(&self) -> &str {
        &self.node.msg
    }

    /// The wrapped cause, if any.
    pub fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        self.node.cause.as_ref().map(Cause::as_error)
    }

    /// The kind this error was derived from.
    pub fn base(&self) -> Option<&Error> {
        self.node.base.as_ref()
    }

    /// Attribute entries stored on this node only.
    pub fn own_args(&self) -> &[Arg] {
        &self.node.args
    }

    /// Iterate the kind chain, starting at this error's base.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: self.node.base.as_ref(),
        }
    }

    /// Reports whether `target` is one of this error's kinds.
    ///
    /// Only the base chain is consulted and `self` is excluded. Use
    /// [`crate::is`] for the full check that also covers identity and
    /// wrapped causes.
    pub fn is(&self, target: &Error) -> bool {
        self.ancestors().any(|kind| kind == target)
    }

    fn from_node(node: Node) -> Self {
        Self {
            node: Arc::new(node),
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl Eq for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node.cause {
            Some(cause) => write!(f, "{}: {}", self.node.msg, cause),
            None => write!(f, "{}", self.node.msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Error");
        s.field("msg", &self.node.msg);
        if let Some(cause) = &self.node.cause {
            s.field("cause", cause);
        }
        if !self.node.args.is_empty() {
            s.field("args", &self.node.args);
        }
        if let Some(base) = &self.node.base {
            s.field("base", base);
        }
        s.finish()
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause()
    }
}

/// Iterator over an error's kind chain. See [`Error::ancestors`].
pub struct Ancestors<'a> {
    next: Option<&'a Error>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.node.base.as_ref();
        Some(current)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
