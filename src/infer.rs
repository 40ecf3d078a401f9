//! Schema inference over JSON values.
//!
//! One depth-first pass per document: scalars map to their type tag (numbers
//! split per-value into `integer`/`number`), arrays fold their element
//! schemas through [`merge`], objects record every key as a property and as
//! required. Narrowing `required` to the truly-common keys happens purely in
//! the merge step, when differently-shaped objects meet.

use serde_json::{Map, Number, Value};

use crate::merge::merge;
use crate::schema::{Schema, TypeTag};

/// Draft identifier stamped on the document root by [`generate_schema`].
pub const SCHEMA_DRAFT: &str = "http://json-schema.org/draft-07/schema#";

/// Infer the schema of a single value. Total: never fails on a finite tree.
pub fn infer_value(value: &Value) -> Schema {
    match value {
        Value::Null => Schema::of(TypeTag::Null),
        Value::Bool(_) => Schema::of(TypeTag::Boolean),
        Value::Number(number) => Schema::of(number_tag(number)),
        Value::String(_) => Schema::of(TypeTag::String),
        Value::Array(items) => {
            let unified = items
                .iter()
                .map(infer_value)
                .reduce(|a, b| merge(&a, &b))
                .unwrap_or_default();
            let mut schema = Schema::of(TypeTag::Array);
            schema.items = Some(Box::new(unified));
            schema
        }
        Value::Object(entries) => {
            let mut properties = indexmap::IndexMap::with_capacity(entries.len());
            for (name, value) in entries {
                properties.insert(name.clone(), infer_value(value));
            }
            let mut schema = Schema::of(TypeTag::Object);
            schema.required = if properties.is_empty() {
                None
            } else {
                Some(properties.keys().cloned().collect())
            };
            schema.properties = Some(properties);
            schema
        }
    }
}

/// Per-value integer test: mathematically whole numbers are `integer` even
/// when written as `1.0`.
fn number_tag(number: &Number) -> TypeTag {
    if number.is_i64() || number.is_u64() {
        return TypeTag::Integer;
    }
    match number.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => TypeTag::Integer,
        _ => TypeTag::Number,
    }
}

/// Infer and wrap with the `$schema` draft identifier (root only).
pub fn generate_schema(value: &Value) -> Value {
    wrap_root(&infer_value(value))
}

fn wrap_root(schema: &Schema) -> Value {
    let mut root = Map::new();
    root.insert("$schema".to_string(), Value::from(SCHEMA_DRAFT));
    if let Value::Object(body) = schema.to_value() {
        for (name, value) in body {
            root.insert(name, value);
        }
    }
    Value::Object(root)
}

/// Accumulates evidence across documents; the unified schema covers every
/// value observed so far.
#[derive(Debug, Default)]
pub struct Inference {
    state: Schema,
}

impl Inference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe_value(&mut self, value: &Value) {
        self.state = merge(&self.state, &infer_value(value));
    }

    pub fn solve(&self) -> Schema {
        self.state.clone()
    }

    /// Render the accumulated schema as a root document with `$schema`.
    pub fn to_document(&self) -> Value {
        wrap_root(&self.state)
    }
}
