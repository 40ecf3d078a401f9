//! Schema unification.
//!
//! `merge` is the combinator behind all inference over more than one sample:
//! sibling array elements, same-keyed object branches, and whole documents
//! all fold through it. It is commutative and associative over type sets, and
//! the empty schema is its identity. Substructure is weaker: because
//! `properties`/`items` merge only when both sides qualify, a fold over a
//! heterogeneous element list can keep or drop substructure depending on
//! where the non-object (non-array) elements land.

use indexmap::IndexMap;

use crate::schema::{Schema, TypeTag};

/// Unify two schemas into one covering every value either side covers.
///
/// Substructure is merged only when *both* inputs independently carry the
/// relevant kind: a schema that was never an object contributes nothing to
/// `properties`, even if the unioned type set ends up containing `object`.
/// `required` narrows to the intersection, which is how "fields common to all
/// observed objects" emerges from repeated merging.
pub fn merge(a: &Schema, b: &Schema) -> Schema {
    if a.is_empty() {
        return b.clone();
    }
    if b.is_empty() {
        return a.clone();
    }

    let mut out = Schema::default();
    out.types = &a.types | &b.types;

    if a.has(TypeTag::Object) && b.has(TypeTag::Object) {
        out.properties = Some(merge_properties(
            a.properties.as_ref(),
            b.properties.as_ref(),
        ));
        out.required = intersect_required(a.required.as_deref(), b.required.as_deref());
    }

    if a.has(TypeTag::Array) && b.has(TypeTag::Array) {
        let empty = Schema::default();
        let items = merge(
            a.items.as_deref().unwrap_or(&empty),
            b.items.as_deref().unwrap_or(&empty),
        );
        out.items = Some(Box::new(items));
    }

    out
}

/// Key-set union, `a`'s keys first in their own order, then keys only `b`
/// has; keys present on both sides merge recursively.
fn merge_properties(
    a: Option<&IndexMap<String, Schema>>,
    b: Option<&IndexMap<String, Schema>>,
) -> IndexMap<String, Schema> {
    let mut out = IndexMap::new();
    if let Some(a) = a {
        for (name, sa) in a {
            match b.and_then(|b| b.get(name)) {
                None => {
                    out.insert(name.clone(), sa.clone());
                }
                Some(sb) => {
                    out.insert(name.clone(), merge(sa, sb));
                }
            }
        }
    }
    if let Some(b) = b {
        for (name, sb) in b {
            if !out.contains_key(name) {
                out.insert(name.clone(), sb.clone());
            }
        }
    }
    out
}

/// Names required by both sides, in `a`'s order; `None` when the
/// intersection is empty.
fn intersect_required(a: Option<&[String]>, b: Option<&[String]>) -> Option<Vec<String>> {
    let (a, b) = (a?, b?);
    let keep: Vec<String> = a
        .iter()
        .filter(|name| b.iter().any(|other| other == *name))
        .cloned()
        .collect();
    if keep.is_empty() { None } else { Some(keep) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infer::infer_value;
    use serde_json::json;
    use std::collections::BTreeSet;

    #[test]
    fn empty_schema_is_identity() {
        let empty = Schema::default();
        let some = infer_value(&json!({ "a": 1 }));
        assert_eq!(merge(&empty, &some), some);
        assert_eq!(merge(&some, &empty), some);
        assert_eq!(merge(&empty, &empty), empty);
    }

    #[test]
    fn scalar_types_union_as_a_set() {
        let a = Schema::of(TypeTag::Integer);
        let b = Schema::of(TypeTag::Number);
        let merged = merge(&a, &b);
        assert_eq!(
            merged.types,
            BTreeSet::from([TypeTag::Integer, TypeTag::Number])
        );
        // duplicate tags collapse
        let again = merge(&merged, &a);
        assert_eq!(again.types, merged.types);
    }

    #[test]
    fn required_narrows_to_the_intersection() {
        let a = infer_value(&json!({ "a": 1, "b": 2 }));
        let b = infer_value(&json!({ "a": 1 }));
        let merged = merge(&a, &b);
        assert_eq!(merged.required.as_deref(), Some(&["a".to_string()][..]));
        let properties = merged.properties.expect("properties");
        let names: Vec<&str> = properties.keys().map(String::as_str).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn required_is_omitted_when_the_intersection_is_empty() {
        let a = infer_value(&json!({ "a": 1 }));
        let b = infer_value(&json!({ "b": 2 }));
        let merged = merge(&a, &b);
        assert!(merged.required.is_none());
        assert_eq!(merged.properties.expect("properties").len(), 2);
    }

    #[test]
    fn property_order_is_first_seen() {
        let a = infer_value(&json!({ "x": 1, "y": 2 }));
        let b = infer_value(&json!({ "y": 2, "z": 3 }));
        let merged = merge(&a, &b);
        let properties = merged.properties.expect("properties");
        let names: Vec<&str> = properties.keys().map(String::as_str).collect();
        assert_eq!(names, ["x", "y", "z"]);
    }

    #[test]
    fn substructure_requires_both_sides_to_qualify() {
        let obj = infer_value(&json!({ "a": 1 }));
        let scalar = Schema::of(TypeTag::Integer);
        let merged = merge(&obj, &scalar);
        assert_eq!(
            merged.types,
            BTreeSet::from([TypeTag::Integer, TypeTag::Object])
        );
        assert!(merged.properties.is_none());
        assert!(merged.required.is_none());

        let arr = infer_value(&json!([1, 2]));
        let merged = merge(&arr, &scalar);
        assert!(merged.items.is_none());
    }

    #[test]
    fn type_sets_are_fold_order_independent_even_when_substructure_is_not() {
        let obj_a = infer_value(&json!({ "a": 1 }));
        let obj_b = infer_value(&json!({ "a": 3 }));
        let scalar = Schema::of(TypeTag::Integer);

        let objects_first = merge(&merge(&obj_a, &obj_b), &scalar);
        let scalar_between = merge(&merge(&obj_a, &scalar), &obj_b);

        // the unioned tags agree regardless of fold order
        assert_eq!(objects_first.types, scalar_between.types);
        assert_eq!(
            objects_first.types,
            BTreeSet::from([TypeTag::Integer, TypeTag::Object])
        );
        // substructure does not: once a non-object entered the fold, the
        // left side lacks properties and the union passes the right's through
        assert!(objects_first.properties.is_none());
        assert!(scalar_between.properties.is_some());
    }

    #[test]
    fn array_items_merge_recursively() {
        let a = infer_value(&json!([1]));
        let b = infer_value(&json!(["x"]));
        let merged = merge(&a, &b);
        let items = merged.items.expect("items");
        assert_eq!(
            items.types,
            BTreeSet::from([TypeTag::Integer, TypeTag::String])
        );
    }

    #[test]
    fn empty_array_items_act_as_identity() {
        let a = infer_value(&json!([]));
        let b = infer_value(&json!([{ "a": 1 }]));
        let merged = merge(&a, &b);
        let items = merged.items.expect("items");
        assert!(items.has(TypeTag::Object));
        assert!(items.properties.is_some(), "object item schema survives");
    }

    #[test]
    fn merge_is_commutative_and_associative() {
        let a = infer_value(&json!({ "a": 1, "b": "x" }));
        let b = infer_value(&json!({ "a": 2.5 }));
        let c = infer_value(&json!({ "b": "y", "c": true }));

        let ab = merge(&a, &b);
        let ba = merge(&b, &a);
        assert_eq!(ab.to_value(), ba.to_value());

        let ab_c = merge(&ab, &c);
        let a_bc = merge(&a, &merge(&b, &c));
        assert_eq!(ab_c.to_value(), a_bc.to_value());
    }
}
