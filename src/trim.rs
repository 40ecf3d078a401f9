//! Structural trimming.
//!
//! `trim_value` produces a size-reduced copy of a document: every array, at
//! every depth, keeps at most `limit` elements (the first ones, in order),
//! and recursion only descends into retained elements. Object key sets and
//! key order are untouched, scalars pass through as-is. Total and pure.

use serde_json::Value;

pub fn trim_value(value: &Value, limit: usize) -> Value {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .take(limit)
                .map(|item| trim_value(item, limit))
                .collect(),
        ),
        Value::Object(entries) => Value::Object(
            entries
                .iter()
                .map(|(name, value)| (name.clone(), trim_value(value, limit)))
                .collect(),
        ),
    }
}
