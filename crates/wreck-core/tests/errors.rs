//! Integration tests for error construction, matching and attribute
//! extraction.

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::sync::Arc;

use wreck_core::{args, attrs, find, is, value, Arg, Attr, BoxError, Cause, Error, Joined, Value};

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn io_error(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Other, msg.to_string())
}

/// A foreign error type that wraps another error.
#[derive(Debug)]
struct Request {
    source: Box<dyn StdError + Send + Sync>,
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request failed")
    }
}

impl StdError for Request {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.source)
    }
}

/// Base chain used by the attribute tests: `c=3` on top of `a=1, b=2`.
fn tagged_error() -> Error {
    let orig_base = Error::new("base").with(args!["a", "value1", "b", "value2"]);
    let new_base = orig_base.with(args!["c", "value3"]);
    new_base.derive("Message")
}

// ─── Construction & matching ──────────────────────────────────────────────────

#[test]
fn new_error_matches_base() {
    let base = Error::new("base");
    let err = base.derive("new error");
    assert!(is(&err, &base));
    assert_eq!(err.to_string(), "new error");
}

#[test]
fn matching_is_transitive() {
    let base = Error::new("base");
    let d1 = base.derive("d1");
    let d2 = d1.derive("d2");
    let d3 = d2.with(args!["k", "v"]).derive("d3");
    for err in [&d1, &d2, &d3] {
        assert!(is(err, &base), "{err} should match base");
    }
    assert!(is(&d3, &d1));
}

#[test]
fn wrapping_existing_error() {
    let base = Error::new("base");
    let one = Error::new("one");
    let err = base.wrap("new error", [one.clone()]);
    assert!(is(&err, &base));
    assert!(is(&err, &one));
    assert_eq!(err.to_string(), "new error: one");
}

#[test]
fn wrapping_multiple_existing_errors() {
    let base = Error::new("base");
    let one = Error::new("one");
    let two = Error::new("two");
    let err = base.wrap("new error", [one.clone(), two.clone()]);
    assert!(is(&err, &base));
    assert!(is(&err, &one));
    assert!(is(&err, &two));
    assert_eq!(err.to_string(), "new error: one\ntwo");
}

#[test]
fn wrapping_multiple_times() {
    let inner = Error::new("inner");
    let outer = Error::new("outer");

    let err1 = inner.derive("one");
    let err2 = outer.wrap("two", [err1.clone()]);

    assert!(is(&err1, &inner));
    assert!(is(&err2, &outer));
    assert!(is(&err2, &inner));
    assert!(!is(&err1, &outer));
    assert_eq!(err2.to_string(), "two: one");
}

#[test]
fn foreign_causes_are_reachable() {
    let base = Error::new("base");
    let err = base.wrap("read failed", [io_error("permission denied")]);
    assert_eq!(err.to_string(), "read failed: permission denied");
    let cause = find::<io::Error>(&err).unwrap();
    assert_eq!(cause.kind(), io::ErrorKind::Other);
    assert!(err.source().is_some());
}

#[test]
fn boxed_cause_is_reachable() {
    let boxed: BoxError = Box::new(io_error("timed out"));
    let err = Error::new("base").wrap("fetch failed", [Cause::from_boxed(boxed)]);
    assert_eq!(err.to_string(), "fetch failed: timed out");
    assert_eq!(find::<io::Error>(&err).unwrap().to_string(), "timed out");
}

#[test]
fn shared_cause_is_reachable() {
    let shared: Arc<dyn StdError + Send + Sync> = Arc::new(io_error("reset"));
    let err = Error::new("base").wrap("send failed", [Cause::from_arc(shared.clone())]);
    assert_eq!(err.to_string(), "send failed: reset");
    assert!(find::<io::Error>(&err).is_some());
    let cause: *const dyn StdError = err.cause().unwrap();
    assert_eq!(cause as *const (), Arc::as_ptr(&shared) as *const ());
}

#[test]
fn safe_error_message() {
    let base = Error::new("base");
    let err = base.wrap("Message", [io_error("internal message")]);
    assert_eq!(err.to_string(), "Message: internal message");
    assert_eq!(err.message(), "Message");
}

#[test]
fn plain_error_does_not_match() {
    let base = Error::new("base");
    assert!(!is(&io_error("plain"), &base));
}

// ─── Attributes ───────────────────────────────────────────────────────────────

#[test]
fn values_are_stored_on_new_base_error() {
    let orig_base = Error::new("base");
    let new_base = orig_base.with(args!["key", "value"]);
    let err = new_base.derive("Message");
    assert_eq!(wreck_core::args(&err), args!["key", "value"]);
}

#[test]
fn original_base_error_is_not_modified() {
    let orig_base = Error::new("base");
    let derived = orig_base.with(args!["key", "value"]);

    let err = orig_base.derive("Message");
    assert!(wreck_core::args(&err).is_empty());
    assert!(attrs(&err).is_empty());

    let tagged = derived.derive("Message");
    assert_eq!(attrs(&tagged), vec![Attr::string("key", "value")]);
}

#[test]
fn error_matches_original_base_error() {
    let orig_base = Error::new("base");
    let new_base = orig_base.with(args!["key", "value"]);
    let err = new_base.derive("Message");

    assert_eq!(wreck_core::args(&err), args!["key", "value"]);
    assert!(is(&err, &new_base));
    assert!(is(&err, &orig_base));
}

#[test]
fn all_attributes_are_collected_innermost_first() {
    let err = tagged_error();
    assert_eq!(wreck_core::args(&err), args!["c", "value3", "a", "value1", "b", "value2"]);
}

#[test]
fn attributes_can_be_records() {
    let orig_base = Error::new("base").with(args!["a", "value1", Attr::int("b", 2)]);
    let new_base = orig_base.with(args!["c", "value3"]);
    let err = new_base.derive("Message");

    assert_eq!(
        wreck_core::args(&err),
        args!["c", "value3", "a", "value1", "b", 2i64]
    );
}

#[test]
fn attributes_normalize_to_records() {
    assert_eq!(
        attrs(&tagged_error()),
        vec![
            Attr::string("c", "value3"),
            Attr::string("a", "value1"),
            Attr::string("b", "value2"),
        ]
    );
}

#[test]
fn single_attribute_can_be_looked_up() {
    let err = tagged_error();
    let v = value(&err, "a").unwrap();
    assert_eq!(v.as_str(), Some("value1"));
    assert_eq!(value(&err, "missing"), None);
}

#[test]
fn args_alternate_keys_and_values() {
    let list = wreck_core::args(&tagged_error());
    assert_eq!(list.len(), 6);
    for pair in list.chunks(2) {
        assert!(matches!(&pair[0], Arg::Value(Value::Str(_))));
    }
}

#[test]
fn plain_error_has_no_attributes() {
    let err = io_error("plain");
    assert!(attrs(&err).is_empty());
    assert!(wreck_core::args(&err).is_empty());
    assert_eq!(value(&err, "a"), None);
}

#[test]
fn attributes_found_behind_foreign_wrapper() {
    let err = Request {
        source: Box::new(tagged_error()),
    };
    assert_eq!(value(&err, "c"), Some(Value::from("value3")));
}

#[test]
fn attributes_found_inside_joined_cause() {
    let kind = Error::new("kind").with(args!["id", 7u64]);
    let joined: Joined = [Cause::from(io_error("x")), Cause::from(kind.derive("m"))]
        .into_iter()
        .collect();
    let err = Request {
        source: Box::new(joined),
    };
    assert_eq!(err.source().unwrap().to_string(), "x\nm");
    assert_eq!(value(&err, "id"), Some(Value::Uint(7)));
}

#[test]
fn first_error_found_wins() {
    let inner_kind = Error::new("inner").with(args!["inner", true]);
    let outer_kind = Error::new("outer").with(args!["outer", true]);
    let err = outer_kind.wrap("outer failed", [inner_kind.derive("inner failed")]);

    assert_eq!(attrs(&err), vec![Attr::bool("outer", true)]);
    assert_eq!(value(&err, "inner"), None);
}

#[test]
fn cause_is_not_walked_for_attributes() {
    let kind = Error::new("kind");
    let cause = Error::new("cause").with(args!["from_cause", 1i64]);
    let err = kind.wrap("msg", [cause.derive("c")]);
    assert!(attrs(&err).is_empty());
}
