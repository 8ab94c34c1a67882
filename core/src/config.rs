#![deny(missing_docs)]

//! # Caller-Supplied Configuration
//!
//! Definition of the declarative inputs the pipeline reads: the route
//! table, the per-resource descriptors and the optional blueprint
//! documentation. The core only borrows these values; it never mutates
//! or retains them.

use crate::models::Method;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An ordered field-schema mapping: field name -> attributes.
pub type FieldMap = IndexMap<String, FieldAttrs>;

/// Attributes of one schema field.
///
/// `type`/`required` are the attributes the flattener interprets;
/// everything else passes through untouched via `extra`. The structural
/// `schema`/`keyschema` entries describe nesting (see [`NestedSchema`]).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldAttrs {
    /// Declared field type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Whether the field is required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Nested schema: either an object of fields or a single field-attrs
    /// mapping (e.g. a list item schema).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<NestedSchema>,
    /// Wildcard-keyed map schema; children are expanded under
    /// `<field>.*.`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyschema: Option<FieldMap>,
    /// Any other attribute the schema carries, preserved verbatim.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// The two shapes a field-level `schema` entry can take.
///
/// An object-style nested schema has mapping-valued entries throughout
/// and is expanded into dotted names; a single field-attrs mapping (the
/// shape list item schemas take) stays a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NestedSchema {
    /// Object-style nesting: every value is itself a field mapping.
    Fields(FieldMap),
    /// A single field-attrs mapping; not expanded further.
    Attrs(Box<FieldAttrs>),
}

/// The additional lookup of a resource, exposing items under a second
/// field (e.g. `/people/{lastname}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalLookup {
    /// The schema field the alternate path looks items up by.
    pub field: String,
}

/// Declarative description of one resource ("domain").
///
/// `item_lookup_field` and `schema` are optional at the type level and
/// validated only when the resource is actually composed; a resource that
/// is filtered out (internal, no methods, version shadow) may omit them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceDescriptor {
    /// The field items are looked up by on the item path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_lookup_field: Option<String>,
    /// The ordered field schema of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<FieldMap>,
    /// Methods supported on the item path, in author order.
    pub item_methods: Vec<Method>,
    /// Methods supported on the collection path, in author order.
    pub resource_methods: Vec<Method>,
    /// Internal resources never appear in the merged output.
    pub internal_resource: bool,
    /// Free-text description of the resource.
    pub description: String,
    /// Overrides the collection path (may contain placeholder tokens).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Optional alternate item lookup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_lookup: Option<AdditionalLookup>,
    /// Singular display title used in method labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_title: Option<String>,
}

impl ResourceDescriptor {
    /// True when the resource exposes at least one method on either path.
    pub fn has_methods(&self) -> bool {
        !self.item_methods.is_empty() || !self.resource_methods.is_empty()
    }

    /// The singular display title; defaults to the domain name with one
    /// trailing `s` stripped.
    pub fn title_for(&self, domain: &str) -> String {
        match &self.item_title {
            Some(title) => title.clone(),
            None => domain.strip_suffix('s').unwrap_or(domain).to_string(),
        }
    }
}

/// One raw route as the host application registered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// The raw pattern, possibly containing `<converter:name>` tokens.
    pub raw_pattern: String,
    /// Methods answered on the pattern; undocumented verbs are kept here
    /// as strings so they can be ignored rather than rejected.
    #[serde(default)]
    pub methods: Vec<String>,
}

/// Free-text documentation for a route group that has no full resource
/// descriptor (e.g. a framework-internal blueprint).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlueprintDoc {
    /// Free-text description of the route group.
    pub description: String,
    /// Name of a configured domain whose schema documents the bodies the
    /// blueprint accepts on POST/PATCH/PUT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

/// The whole caller input, mirroring the host application's configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base link of the API; prefixed with `preferred_scheme://` when it
    /// carries no scheme of its own.
    pub base: String,
    /// Scheme used when `base` is scheme-less.
    pub preferred_scheme: String,
    /// Host name the API is served under.
    pub server_name: String,
    /// Display name of the API.
    pub api_name: String,
    /// Suffix of version-shadow collections, which are hidden from the
    /// output when configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_suffix: Option<String>,
    /// The raw route table.
    pub routes: Vec<RouteEntry>,
    /// Blueprint documentation; `None` disables the route skeleton layer
    /// entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blueprint_docs: Option<IndexMap<String, BlueprintDoc>>,
    /// Domain name -> resource descriptor.
    pub domain: IndexMap<String, ResourceDescriptor>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base: String::new(),
            preferred_scheme: "http".to_string(),
            server_name: String::new(),
            api_name: "API".to_string(),
            version_suffix: None,
            routes: Vec::new(),
            blueprint_docs: None,
            domain: IndexMap::new(),
        }
    }
}
