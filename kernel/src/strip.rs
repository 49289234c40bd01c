//! Null stripping.
//!
//! Removes object members whose value is `null`, at every depth. Array
//! elements that are `null` are kept: only object values are stripped.
//! Producers that hash with this rule treat the two cases differently, so
//! the asymmetry has to be reproduced as-is.

use serde_json::Value;

/// Return a null-stripped deep copy of `value`. The input is left untouched.
///
/// Recurses once per nesting level, like the writer.
#[must_use]
pub fn strip_nulls(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(strip_nulls).collect()),
        other => other.clone(),
    }
}
