#![deny(missing_docs)]

//! # Document Assembly
//!
//! Merges the three documentation layers into the final document and
//! exposes [`build_document`], the single entry point of the pipeline.
//!
//! Precedence is positional and explicit: the route-derived skeleton is
//! the base, blueprint free-text descriptions overlay it, and full
//! resource-descriptor documentation overwrites whole entries last.

use crate::config::ApiConfig;
use crate::endpoints::compose_endpoint;
use crate::error::{DocError, DocResult};
use crate::models::{DocumentRoot, ResourceDoc};
use crate::routes::index_routes;
use indexmap::IndexMap;
use url::Url;

/// One layer of the merged documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocLayer {
    /// Skeleton derived from the raw route table.
    RouteSkeleton,
    /// Blueprint free-text descriptions overlaid per domain.
    BlueprintDescription,
    /// Full resource-descriptor documentation.
    ResourceDescriptor,
}

/// Merge order, lowest precedence first.
pub const LAYER_PRECEDENCE: [DocLayer; 3] = [
    DocLayer::RouteSkeleton,
    DocLayer::BlueprintDescription,
    DocLayer::ResourceDescriptor,
];

/// Merges all layers into the final domain mapping.
pub fn merge_domains(cfg: &ApiConfig) -> DocResult<IndexMap<String, ResourceDoc>> {
    let mut domains = IndexMap::new();
    for layer in LAYER_PRECEDENCE {
        apply_layer(&mut domains, layer, cfg)?;
    }
    Ok(domains)
}

/// Applies one layer onto the accumulated domains.
///
/// The skeleton and descriptor layers write whole entries; the blueprint
/// layer only touches the description of domains already present.
fn apply_layer(
    domains: &mut IndexMap<String, ResourceDoc>,
    layer: DocLayer,
    cfg: &ApiConfig,
) -> DocResult<()> {
    match layer {
        DocLayer::RouteSkeleton => {
            // No blueprint documentation configured at all: the skeleton
            // layer is simply empty
            if let Some(blueprint_docs) = &cfg.blueprint_docs {
                *domains = index_routes(&cfg.routes, blueprint_docs, &cfg.domain)?;
            }
        }
        DocLayer::BlueprintDescription => {
            if let Some(blueprint_docs) = &cfg.blueprint_docs {
                for (domain, doc) in domains.iter_mut() {
                    if let Some(blueprint) = blueprint_docs.get(domain) {
                        doc.description = blueprint.description.clone();
                    }
                }
            }
        }
        DocLayer::ResourceDescriptor => {
            for (domain, resource) in &cfg.domain {
                if !resource.has_methods() || resource.internal_resource {
                    continue;
                }
                // Hide the shadow collections of document versioning
                if let Some(suffix) = &cfg.version_suffix {
                    if domain.ends_with(suffix.as_str()) {
                        continue;
                    }
                }
                let mut doc = compose_endpoint(&cfg.domain, domain, resource)?;
                // Paths overwrite wholesale; the description merges per
                // key with the last non-empty write winning, so a
                // blueprint description survives a descriptor without one
                if doc.description.is_empty() {
                    if let Some(previous) = domains.get(domain) {
                        doc.description = previous.description.clone();
                    }
                }
                domains.insert(domain.clone(), doc);
            }
        }
    }
    Ok(())
}

/// Derives the complete documentation of an API description.
pub fn build_document(cfg: &ApiConfig) -> DocResult<DocumentRoot> {
    Ok(DocumentRoot {
        base: resolve_base(cfg)?,
        server_name: cfg.server_name.clone(),
        api_name: cfg.api_name.clone(),
        domains: merge_domains(cfg)?,
    })
}

/// The absolute base link: prefixes `preferred_scheme://` when the
/// configured base carries no scheme, and rejects values that still do not
/// parse as a URL.
fn resolve_base(cfg: &ApiConfig) -> DocResult<String> {
    let base = if cfg.base.contains("://") {
        cfg.base.clone()
    } else {
        format!("{}://{}", cfg.preferred_scheme, cfg.base)
    };
    Url::parse(&base)
        .map_err(|e| DocError::Configuration(format!("invalid base link '{}': {}", base, e)))?;
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Method;
    use pretty_assertions::assert_eq;

    fn config(yaml: &str) -> ApiConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_base_is_prefixed_with_preferred_scheme() {
        let cfg = config("base: example.com:5000/api");
        let doc = build_document(&cfg).unwrap();
        assert_eq!(doc.base, "http://example.com:5000/api");

        let cfg = config("{base: example.com/api, preferred_scheme: https}");
        assert_eq!(build_document(&cfg).unwrap().base, "https://example.com/api");

        let cfg = config("base: https://example.com/api");
        assert_eq!(build_document(&cfg).unwrap().base, "https://example.com/api");
    }

    #[test]
    fn test_descriptor_layer_overwrites_skeleton_but_keeps_blueprint_description() {
        let cfg = config(
            r#"
base: example.com
server_name: example.com
api_name: Widget API
routes:
  - {raw_pattern: "/widgets", methods: [GET, HEAD]}
blueprint_docs:
  widgets: {description: widget catalogue}
domain:
  widgets:
    item_lookup_field: id
    schema:
      name: {type: string}
    resource_methods: [GET]
    item_methods: []
"#,
        );
        let doc = build_document(&cfg).unwrap();

        let widgets = &doc.domains["widgets"];
        // Full descriptor paths replaced the skeleton entry
        assert!(widgets.paths.contains_key("/widgets/{id}"));
        let get = &widgets.paths["/widgets"][&Method::Get];
        assert_eq!(get.label.as_deref(), Some("retrieve all widgets"));
        // ...while the blueprint free-text description survives because
        // the descriptor carries none of its own
        assert_eq!(widgets.description, "widget catalogue");
    }

    #[test]
    fn test_descriptor_description_beats_blueprint_description() {
        let cfg = config(
            r#"
base: example.com
routes:
  - {raw_pattern: "/widgets", methods: [GET]}
blueprint_docs:
  widgets: {description: widget catalogue}
domain:
  widgets:
    item_lookup_field: id
    description: the real widgets
    schema: {name: {type: string}}
    resource_methods: [GET]
    item_methods: []
"#,
        );
        let doc = build_document(&cfg).unwrap();
        assert_eq!(doc.domains["widgets"].description, "the real widgets");
    }

    #[test]
    fn test_blueprint_description_overlays_skeleton_domains() {
        let cfg = config(
            r#"
base: example.com
routes:
  - {raw_pattern: "/uploads", methods: [GET]}
blueprint_docs:
  uploads: {description: file uploads}
"#,
        );
        let doc = build_document(&cfg).unwrap();
        assert_eq!(doc.domains["uploads"].description, "file uploads");
    }

    #[test]
    fn test_no_blueprint_docs_means_empty_skeleton() {
        let cfg = config(
            r#"
base: example.com
routes:
  - {raw_pattern: "/uploads", methods: [GET]}
"#,
        );
        let doc = build_document(&cfg).unwrap();
        assert!(doc.domains.is_empty());
    }

    #[test]
    fn test_internal_and_method_less_resources_are_excluded() {
        let cfg = config(
            r#"
base: example.com
domain:
  audit:
    item_lookup_field: id
    schema: {event: {type: string}}
    resource_methods: [GET]
    item_methods: [GET]
    internal_resource: true
  dormant:
    item_lookup_field: id
    schema: {name: {type: string}}
    resource_methods: []
    item_methods: []
  people:
    item_lookup_field: id
    schema: {name: {type: string}}
    resource_methods: [GET]
    item_methods: [GET]
"#,
        );
        let doc = build_document(&cfg).unwrap();
        let domains: Vec<&str> = doc.domains.keys().map(String::as_str).collect();
        assert_eq!(domains, vec!["people"]);
    }

    #[test]
    fn test_version_shadow_collections_are_excluded() {
        let cfg = config(
            r#"
base: example.com
version_suffix: _versions
domain:
  people:
    item_lookup_field: id
    schema: {name: {type: string}}
    resource_methods: [GET]
    item_methods: [GET]
  people_versions:
    item_lookup_field: id
    schema: {name: {type: string}}
    resource_methods: [GET]
    item_methods: [GET]
"#,
        );
        let doc = build_document(&cfg).unwrap();
        let domains: Vec<&str> = doc.domains.keys().map(String::as_str).collect();
        assert_eq!(domains, vec!["people"]);
    }

    #[test]
    fn test_layer_precedence_is_skeleton_then_blueprint_then_descriptor() {
        assert_eq!(
            LAYER_PRECEDENCE,
            [
                DocLayer::RouteSkeleton,
                DocLayer::BlueprintDescription,
                DocLayer::ResourceDescriptor,
            ]
        );
    }
}
