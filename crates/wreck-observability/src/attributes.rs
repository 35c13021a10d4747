//! Rendering and conversion of extracted error attributes.

use opentelemetry::KeyValue;
use std::error::Error as StdError;
use std::fmt;
use wreck_core::{Attr, Value};

/// Displays attributes as space-separated `key=value` pairs.
///
/// Group members are shown with dotted keys: `req.method=GET`.
pub struct Attributes<'a>(pub &'a [Attr]);

impl fmt::Display for Attributes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in flatten(self.0).iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// Flatten groups into dotted keys, preserving order.
pub fn flatten(attrs: &[Attr]) -> Vec<(String, &Value)> {
    let mut out = Vec::new();
    flatten_into(&mut out, "", attrs);
    out
}

fn flatten_into<'a>(out: &mut Vec<(String, &'a Value)>, prefix: &str, attrs: &'a [Attr]) {
    for attr in attrs {
        let key = if prefix.is_empty() {
            attr.key.clone()
        } else {
            format!("{prefix}.{}", attr.key)
        };
        match &attr.value {
            Value::Group(members) => flatten_into(out, &key, members),
            value => out.push((key, value)),
        }
    }
}

/// Convert the attributes of `err` into OpenTelemetry key-values.
pub fn key_values(err: &(dyn StdError + 'static)) -> Vec<KeyValue> {
    let attrs = wreck_core::attrs(err);
    flatten(&attrs)
        .into_iter()
        .map(|(key, value)| KeyValue::new(key, otel_value(value)))
        .collect()
}

fn otel_value(value: &Value) -> opentelemetry::Value {
    match value {
        Value::Str(s) => s.clone().into(),
        Value::Int(v) => (*v).into(),
        // OpenTelemetry has no unsigned type; fall back to text past i64::MAX.
        Value::Uint(v) => match i64::try_from(*v) {
            Ok(v) => v.into(),
            Err(_) => v.to_string().into(),
        },
        Value::Float(v) => (*v).into(),
        Value::Bool(v) => (*v).into(),
        Value::Bytes(_) | Value::Duration(_) | Value::Group(_) => value.to_string().into(),
    }
}
