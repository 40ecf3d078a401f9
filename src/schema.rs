//! Partial, mergeable schema descriptors.
//!
//! A `Schema` records the shapes observed for one or more JSON values using a
//! small vocabulary: a set of type tags plus optional substructure
//! (`properties` for objects, `items` for arrays, `required` names). The
//! all-default value is the "empty schema": it constrains nothing and acts as
//! the identity of [`crate::merge::merge`]. Schemas are built bottom-up and
//! never mutated after construction.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// JSON Schema primitive type tags, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TypeTag {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl TypeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Null => "null",
            TypeTag::Boolean => "boolean",
            TypeTag::Integer => "integer",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    /// Observed type tags. Empty set = unconstrained.
    pub types: BTreeSet<TypeTag>,
    /// Per-property schemas, in first-seen key order. Present whenever
    /// `object` was observed directly (possibly empty for `{}` inputs).
    pub properties: Option<IndexMap<String, Schema>>,
    /// Unified element schema. Present whenever `array` was observed
    /// directly; the empty schema means "no elements observed".
    pub items: Option<Box<Schema>>,
    /// Property names required by every observed object; never `Some(vec![])`.
    pub required: Option<Vec<String>>,
}

impl Schema {
    /// Schema observing exactly one type tag.
    pub fn of(tag: TypeTag) -> Self {
        Schema {
            types: BTreeSet::from([tag]),
            ..Schema::default()
        }
    }

    /// True for the merge identity: nothing observed, nothing constrained.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.properties.is_none()
            && self.items.is_none()
            && self.required.is_none()
    }

    pub fn has(&self, tag: TypeTag) -> bool {
        self.types.contains(&tag)
    }

    /// Emit as a JSON value. A singleton type set becomes a scalar `"type"`,
    /// a larger set becomes an array; absent fields are omitted entirely, so
    /// the empty schema renders as `{}`.
    pub fn to_value(&self) -> Value {
        let mut out = Map::new();

        let mut tags = self.types.iter();
        match (tags.next(), tags.next()) {
            (None, _) => {}
            (Some(tag), None) => {
                out.insert("type".to_string(), Value::from(tag.as_str()));
            }
            (Some(_), Some(_)) => {
                let set: Vec<Value> = self
                    .types
                    .iter()
                    .map(|tag| Value::from(tag.as_str()))
                    .collect();
                out.insert("type".to_string(), Value::Array(set));
            }
        }

        if let Some(properties) = &self.properties {
            let mut rendered = Map::new();
            for (name, schema) in properties {
                rendered.insert(name.clone(), schema.to_value());
            }
            out.insert("properties".to_string(), Value::Object(rendered));
        }

        if let Some(required) = &self.required {
            if !required.is_empty() {
                let names: Vec<Value> =
                    required.iter().cloned().map(Value::from).collect();
                out.insert("required".to_string(), Value::Array(names));
            }
        }

        if let Some(items) = &self.items {
            out.insert("items".to_string(), items.to_value());
        }

        Value::Object(out)
    }
}

impl serde::Serialize for Schema {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_value().serialize(serializer)
    }
}
