//! Attribute records attached to errors.
//!
//! Attributes are stored on error nodes as raw [`Arg`] entries, the same
//! loose shape a variadic logging call accepts: bare `key, value` pairs mixed
//! with pre-built [`Attr`] records. They only become a uniform list of
//! [`Attr`]s when extracted (see [`crate::attrs`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Key given to entries that could not be paired with a string key.
pub const BAD_KEY: &str = "!BADKEY";

// ─── Value ────────────────────────────────────────────────────────────────────

/// The value half of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Duration(Duration),
    /// Nested attributes. Extraction never yields an empty group.
    Group(Vec<Attr>),
}

impl Value {
    /// Returns the inner string if this is a `Str` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Uint(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Value::Duration(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the member attributes if this is a `Group` value.
    pub fn as_group(&self) -> Option<&[Attr]> {
        match self {
            Value::Group(attrs) => Some(attrs.as_slice()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            Value::Duration(d) => write!(f, "{d:?}"),
            Value::Group(attrs) => {
                write!(f, "[")?;
                for (i, attr) in attrs.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{attr}")?;
                }
                write!(f, "]")
            }
        }
    }
}

// ─── Attr ─────────────────────────────────────────────────────────────────────

/// A key-value attribute record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, Value::Str(value.into()))
    }

    pub fn int(key: impl Into<String>, value: i64) -> Self {
        Self::new(key, Value::Int(value))
    }

    pub fn uint(key: impl Into<String>, value: u64) -> Self {
        Self::new(key, Value::Uint(value))
    }

    pub fn float(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, Value::Float(value))
    }

    pub fn bool(key: impl Into<String>, value: bool) -> Self {
        Self::new(key, Value::Bool(value))
    }

    pub fn bytes(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self::new(key, Value::Bytes(value.into()))
    }

    pub fn duration(key: impl Into<String>, value: Duration) -> Self {
        Self::new(key, Value::Duration(value))
    }

    /// A named group of attributes. An empty `key` makes the members inline
    /// into the surrounding list on extraction.
    pub fn group(key: impl Into<String>, attrs: impl IntoIterator<Item = Attr>) -> Self {
        Self::new(key, Value::Group(attrs.into_iter().collect()))
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

// ─── Arg ──────────────────────────────────────────────────────────────────────

/// One raw attribute entry as passed to [`crate::Error::with`].
///
/// A run of `Arg::Value`s is read as alternating keys and values; an
/// `Arg::Attr` stands on its own. Build mixed lists with [`crate::args!`].
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Value(Value),
    Attr(Attr),
}

impl From<Attr> for Arg {
    fn from(attr: Attr) -> Self {
        Arg::Attr(attr)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

macro_rules! impl_from {
    ($($ty:ty => |$v:ident| $conv:expr),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from($v: $ty) -> Self {
                    $conv
                }
            }

            impl From<$ty> for Arg {
                fn from(v: $ty) -> Self {
                    Arg::Value(Value::from(v))
                }
            }
        )*
    };
}

impl_from! {
    String => |v| Value::Str(v),
    i8 => |v| Value::Int(i64::from(v)),
    i16 => |v| Value::Int(i64::from(v)),
    i32 => |v| Value::Int(i64::from(v)),
    i64 => |v| Value::Int(v),
    isize => |v| Value::Int(v as i64),
    u8 => |v| Value::Uint(u64::from(v)),
    u16 => |v| Value::Uint(u64::from(v)),
    u32 => |v| Value::Uint(u64::from(v)),
    u64 => |v| Value::Uint(v),
    usize => |v| Value::Uint(v as u64),
    f32 => |v| Value::Float(f64::from(v)),
    f64 => |v| Value::Float(v),
    bool => |v| Value::Bool(v),
    Vec<u8> => |v| Value::Bytes(v),
    Duration => |v| Value::Duration(v),
    Vec<Attr> => |v| Value::Group(v),
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Arg::Value(Value::from(v))
    }
}

// ─── Normalization ────────────────────────────────────────────────────────────

/// Turn a raw entry list into attribute records.
///
/// A string in key position consumes the next entry as its value. A key with
/// nothing after it, or a non-string in key position, lands under
/// [`BAD_KEY`]. Groups with an empty key are inlined, empty groups dropped.
pub(crate) fn normalize(raw: impl IntoIterator<Item = Arg>) -> Vec<Attr> {
    let mut out = Vec::new();
    let mut iter = raw.into_iter();

    while let Some(arg) = iter.next() {
        let attr = match arg {
            Arg::Attr(attr) => attr,
            Arg::Value(Value::Str(key)) => match iter.next() {
                Some(Arg::Value(value)) => Attr { key, value },
                Some(Arg::Attr(attr)) => Attr {
                    key,
                    value: Value::Group(vec![attr]),
                },
                None => Attr {
                    key: BAD_KEY.to_string(),
                    value: Value::Str(key),
                },
            },
            Arg::Value(value) => Attr {
                key: BAD_KEY.to_string(),
                value,
            },
        };
        push_flattened(&mut out, attr);
    }

    out
}

fn push_flattened(out: &mut Vec<Attr>, attr: Attr) {
    let Attr { key, value } = attr;
    match value {
        Value::Group(members) if key.is_empty() => {
            for member in members {
                push_flattened(out, member);
            }
        }
        Value::Group(members) => {
            let mut inner = Vec::with_capacity(members.len());
            for member in members {
                push_flattened(&mut inner, member);
            }
            if !inner.is_empty() {
                out.push(Attr {
                    key,
                    value: Value::Group(inner),
                });
            }
        }
        value => out.push(Attr { key, value }),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
