#![deny(missing_docs)]

//! # Field Flattening
//!
//! Recursively expands a field-schema mapping into an ordered list of flat
//! field descriptors. Nested object schemas expand into dotted names
//! (`address.city`); wildcard-keyed map schemas expand under a literal `*`
//! segment (`ratings.*.value`).
//!
//! Order is a contract: a field's own descriptor comes first, then its
//! expansions, children in source order.

use crate::config::{FieldAttrs, FieldMap, NestedSchema};
use crate::error::{DocError, DocResult};
use crate::models::FieldDescriptor;

/// Upper bound on nested-schema recursion.
///
/// Schema depth is author-controlled; the bound turns a self-referential
/// or absurdly deep schema into a reported error instead of a stack
/// overflow.
pub const MAX_SCHEMA_DEPTH: usize = 64;

/// How a field's attributes nest, if at all.
///
/// Kept structurally exhaustive: every field is exactly one of these.
/// `keyschema` wins over `schema` when a field declares both.
enum Nesting<'a> {
    /// Wildcard-keyed map; children are named `<field>.*.<child>`.
    Wildcard(&'a FieldMap),
    /// Object-style nesting; children are named `<field>.<child>`.
    Object(&'a FieldMap),
    /// No expandable nesting.
    Leaf,
}

fn classify(attrs: &FieldAttrs) -> Nesting<'_> {
    match (&attrs.keyschema, &attrs.schema) {
        (Some(fields), _) => Nesting::Wildcard(fields),
        (None, Some(NestedSchema::Fields(fields))) => Nesting::Object(fields),
        (None, _) => Nesting::Leaf,
    }
}

/// Flattens a field schema into an ordered list of descriptors.
///
/// With `field` given, only that entry of the mapping is expanded (used for
/// alternate-lookup parameters); a missing field is a configuration error.
/// Without it, the whole mapping is expanded in insertion order.
pub fn flatten(schema: &FieldMap, field: Option<&str>) -> DocResult<Vec<FieldDescriptor>> {
    let mut out = Vec::new();
    match field {
        Some(name) => {
            let attrs = schema.get(name).ok_or_else(|| {
                DocError::Configuration(format!("field '{}' not present in schema", name))
            })?;
            flatten_field(name, attrs, "", 0, &mut out)?;
        }
        None => flatten_map(schema, "", 0, &mut out)?,
    }
    Ok(out)
}

fn flatten_map(
    schema: &FieldMap,
    prefix: &str,
    depth: usize,
    out: &mut Vec<FieldDescriptor>,
) -> DocResult<()> {
    for (name, attrs) in schema {
        flatten_field(name, attrs, prefix, depth, out)?;
    }
    Ok(())
}

fn flatten_field(
    name: &str,
    attrs: &FieldAttrs,
    prefix: &str,
    depth: usize,
    out: &mut Vec<FieldDescriptor>,
) -> DocResult<()> {
    let dotted = format!("{}{}", prefix, name);
    if depth > MAX_SCHEMA_DEPTH {
        return Err(DocError::SchemaCycle(format!(
            "nested schema at '{}' exceeds the depth bound of {}",
            dotted, MAX_SCHEMA_DEPTH
        )));
    }

    out.push(descriptor(&dotted, attrs));

    match classify(attrs) {
        Nesting::Wildcard(fields) => {
            flatten_map(fields, &format!("{}.*.", dotted), depth + 1, out)?
        }
        Nesting::Object(fields) => flatten_map(fields, &format!("{}.", dotted), depth + 1, out)?,
        Nesting::Leaf => {}
    }
    Ok(())
}

/// Builds one descriptor: documented defaults overlaid with whatever the
/// schema literally states. Structural `schema`/`keyschema` entries are
/// represented by the expanded children, not re-exported.
fn descriptor(name: &str, attrs: &FieldAttrs) -> FieldDescriptor {
    let mut desc = FieldDescriptor::new(name);
    if let Some(type_name) = &attrs.type_name {
        desc.type_name = type_name.clone();
    }
    if let Some(required) = attrs.required {
        desc.required = required;
    }
    desc.extra = attrs.extra.clone();
    desc
}
