#![deny(missing_docs)]

//! # Resdoc Core
//!
//! Core library that derives structured, directly serializable API
//! documentation from a declarative description of a resource-oriented
//! HTTP API: a raw route table plus per-resource schema descriptors.
//!
//! The pipeline is a pure, single-pass transformation: the route table is
//! indexed into a skeleton, blueprint free-text descriptions overlay it,
//! and full resource-descriptor documentation (paths, methods, labels,
//! flattened parameters) overwrites it last. [`build_document`] is the
//! single entry point.

/// Shared error types.
pub mod error;

/// Caller-supplied configuration (route table, resource descriptors).
pub mod config;

/// Output documentation models.
pub mod models;

/// Field-schema flattening.
pub mod fields;

/// Route-pattern normalization.
pub mod paths;

/// Per-path method composition and label generation.
pub mod methods;

/// Per-resource endpoint assembly.
pub mod endpoints;

/// Route-table indexing (the skeleton layer).
pub mod routes;

/// Layer merging and the top-level entry point.
pub mod document;

pub use config::{
    AdditionalLookup, ApiConfig, BlueprintDoc, FieldAttrs, FieldMap, NestedSchema,
    ResourceDescriptor, RouteEntry,
};
pub use document::{build_document, merge_domains, DocLayer, LAYER_PRECEDENCE};
pub use endpoints::compose_endpoint;
pub use error::{DocError, DocResult};
pub use fields::{flatten, MAX_SCHEMA_DEPTH};
pub use methods::{compose_methods, label, DomainContext};
pub use models::{
    DocumentRoot, FieldDescriptor, Method, MethodDoc, MethodMap, PathDoc, PathKind, ResourceDoc,
};
pub use paths::{normalize, path_param};
pub use routes::index_routes;
