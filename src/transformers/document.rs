//! Decoded-document helpers
//!
//! Loose truthiness and field lookups shared by the transformer and mapper.

use serde_json::Value;

/// Loose emptiness: null, false, zero, "", "0" and [] are empty. Objects,
/// `{}` included, always count as present.
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}

pub(crate) fn is_composite(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Field of an object document that is present and not null.
pub(crate) fn present<'a>(doc: &'a Value, key: &str) -> Option<&'a Value> {
    doc.as_object()
        .and_then(|map| map.get(key))
        .filter(|v| !v.is_null())
}

/// Non-negative integer from a number or a numeric string.
pub(crate) fn as_u64_loose(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| *f >= 0.0).map(|f| f as u64))
        }
        _ => None,
    }
}

/// Items of a sequence or the values of a mapping; any other value is a
/// single item.
pub(crate) fn into_items(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        other => vec![other],
    }
}
