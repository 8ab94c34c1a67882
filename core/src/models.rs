#![deny(missing_docs)]

//! # Documentation Models
//!
//! Definition of the output structures the documentation pipeline produces.
//!
//! Every type here is freshly computed per invocation, immutable once
//! produced, and composed only of strings, booleans, ordered lists and
//! string-keyed ordered maps, so serializing with `serde_json` or
//! `serde_yaml` needs no further transformation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The five HTTP methods the documentation ever renders.
///
/// Anything else present on a route (HEAD, OPTIONS, ...) carries no
/// documentation value and is silently ignored by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Reads a collection or an item.
    #[serde(rename = "GET")]
    Get,
    /// Creates an item.
    #[serde(rename = "POST")]
    Post,
    /// Updates an item in place.
    #[serde(rename = "PATCH")]
    Patch,
    /// Replaces an item.
    #[serde(rename = "PUT")]
    Put,
    /// Deletes a collection or an item.
    #[serde(rename = "DELETE")]
    Delete,
}

impl Method {
    /// Parses one of the five documented verbs (upper-case).
    ///
    /// Returns `None` for anything else: undocumented methods are skipped,
    /// never treated as an error.
    pub fn parse(verb: &str) -> Option<Method> {
        match verb {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            "PATCH" => Some(Method::Patch),
            "PUT" => Some(Method::Put),
            "DELETE" => Some(Method::Delete),
            _ => None,
        }
    }

    /// Returns the upper-case verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification of the canonical paths a resource answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// The collection as a whole, e.g. `/people`.
    Collection,
    /// A single item addressed by its lookup field, e.g. `/people/{id}`.
    Item,
    /// A single item addressed by an additional lookup field.
    AlternateLookup,
}

/// A flattened request parameter.
///
/// Produced by the field flattener; `name` is the dot-separated path of the
/// field and may contain a literal `*` segment for wildcard-keyed maps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    /// Dot-separated field path.
    pub name: String,
    /// Declared field type; `"None"` when the schema does not state one.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Whether the field is required.
    pub required: bool,
    /// Passthrough attributes the schema carries beyond type/required,
    /// exported at the top level of the descriptor.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl FieldDescriptor {
    /// A descriptor with the documented defaults (`type: "None"`, optional).
    pub fn new(name: impl Into<String>) -> Self {
        FieldDescriptor {
            name: name.into(),
            type_name: "None".to_string(),
            required: false,
            extra: IndexMap::new(),
        }
    }

    /// The identifier parameter derived from a resource's lookup field.
    pub fn identifier(name: impl Into<String>) -> Self {
        FieldDescriptor {
            name: name.into(),
            type_name: "string".to_string(),
            required: true,
            extra: IndexMap::new(),
        }
    }
}

/// Documentation of one method on one path.
///
/// Skeleton-layer entries (derived from the raw route table) have neither a
/// label nor params; fully composed entries have both.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MethodDoc {
    /// Human-readable label, e.g. `"retrieve all people"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Request parameters accepted by this method, in flattening order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<FieldDescriptor>>,
}

/// Documented methods of one path, in author order.
pub type MethodMap = IndexMap<Method, MethodDoc>;

/// Canonical path template -> documented methods.
pub type PathDoc = IndexMap<String, MethodMap>;

/// Documentation of one resource (domain).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResourceDoc {
    /// Free-text description of the resource.
    pub description: String,
    /// All canonical paths the resource answers to.
    pub paths: PathDoc,
}

/// The complete documentation value handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRoot {
    /// Absolute base link of the API.
    pub base: String,
    /// Host name the API is served under.
    pub server_name: String,
    /// Display name of the API.
    pub api_name: String,
    /// Documentation per exposed resource.
    pub domains: IndexMap<String, ResourceDoc>,
}
