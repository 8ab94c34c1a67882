#![deny(missing_docs)]

//! # Route Indexing
//!
//! Walks the raw route table once and groups routes by resource name (the
//! first path segment), recording which documented methods answer on each
//! normalized path. This skeleton layer only surfaces routes that have no
//! full resource descriptor (e.g. framework-internal blueprints); full
//! descriptors overwrite it during the merge.

use crate::config::{BlueprintDoc, ResourceDescriptor, RouteEntry};
use crate::error::{DocError, DocResult};
use crate::fields::flatten;
use crate::models::{FieldDescriptor, Method, MethodDoc, ResourceDoc};
use crate::paths::normalize;
use indexmap::IndexMap;

/// Indexes the raw route table into a per-resource skeleton.
///
/// Routes without a usable path segment are skipped with a warning;
/// processing continues for the rest. A blueprint doc may name a domain
/// whose schema documents the bodies the blueprint accepts — those
/// flattened fields become the params of POST/PATCH/PUT entries, the only
/// params the skeleton layer ever carries.
pub fn index_routes(
    routes: &[RouteEntry],
    blueprint_docs: &IndexMap<String, BlueprintDoc>,
    domain_map: &IndexMap<String, ResourceDescriptor>,
) -> DocResult<IndexMap<String, ResourceDoc>> {
    let mut out: IndexMap<String, ResourceDoc> = IndexMap::new();

    for route in routes {
        let resource = match first_segment(&route.raw_pattern) {
            Ok(segment) => segment,
            Err(err) => {
                tracing::warn!(pattern = %route.raw_pattern, "skipping route: {}", err);
                continue;
            }
        };

        let path = normalize(&route.raw_pattern);
        let entry = out.entry(resource.to_string()).or_default();
        let methods = entry.paths.entry(path).or_default();

        for raw_method in &route.methods {
            // Only the five documented methods are rendered; others are
            // silently ignored
            let Some(method) = Method::parse(raw_method) else {
                continue;
            };
            let mut doc = MethodDoc::default();
            if matches!(method, Method::Post | Method::Patch | Method::Put) {
                if let Some(params) = blueprint_params(resource, blueprint_docs, domain_map)? {
                    doc.params = Some(params);
                }
            }
            methods.insert(method, doc);
        }
    }
    Ok(out)
}

/// Flattened body fields for a resource whose blueprint doc names a schema
/// alias; `None` when no alias is configured.
fn blueprint_params(
    resource: &str,
    blueprint_docs: &IndexMap<String, BlueprintDoc>,
    domain_map: &IndexMap<String, ResourceDescriptor>,
) -> DocResult<Option<Vec<FieldDescriptor>>> {
    let Some(alias) = blueprint_docs
        .get(resource)
        .and_then(|doc| doc.schema.as_deref())
    else {
        return Ok(None);
    };
    let aliased = domain_map.get(alias).ok_or_else(|| {
        DocError::Configuration(format!(
            "blueprint doc for '{}' names unknown domain '{}'",
            resource, alias
        ))
    })?;
    let schema = aliased.schema.as_ref().ok_or_else(|| {
        DocError::Configuration(format!(
            "blueprint schema domain '{}' is missing 'schema'",
            alias
        ))
    })?;
    flatten(schema, None).map(Some)
}

/// The first non-empty path segment of a raw pattern.
fn first_segment(raw: &str) -> DocResult<&str> {
    raw.split('/').find(|segment| !segment.is_empty()).ok_or_else(|| {
        DocError::MalformedRoute(format!("route pattern '{}' has no path segment", raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn routes(entries: &[(&str, &[&str])]) -> Vec<RouteEntry> {
        entries
            .iter()
            .map(|(pattern, methods)| RouteEntry {
                raw_pattern: pattern.to_string(),
                methods: methods.iter().map(|m| m.to_string()).collect(),
            })
            .collect()
    }

    #[test]
    fn test_groups_routes_by_first_segment() {
        let table = routes(&[
            ("/media", &["GET", "POST"]),
            ("/media/<string:id>", &["GET", "DELETE"]),
            ("/status", &["GET"]),
        ]);
        let skeleton = index_routes(&table, &IndexMap::new(), &IndexMap::new()).unwrap();

        let resources: Vec<&str> = skeleton.keys().map(String::as_str).collect();
        assert_eq!(resources, vec!["media", "status"]);

        let media = &skeleton["media"];
        let paths: Vec<&str> = media.paths.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["/media", "/media/{id}"]);
        assert!(media.paths["/media/{id}"].contains_key(&Method::Delete));
    }

    #[test]
    fn test_undocumented_methods_are_ignored() {
        let table = routes(&[("/media", &["GET", "HEAD", "OPTIONS"])]);
        let skeleton = index_routes(&table, &IndexMap::new(), &IndexMap::new()).unwrap();

        let methods = &skeleton["media"].paths["/media"];
        assert_eq!(methods.len(), 1);
        assert!(methods.contains_key(&Method::Get));
    }

    #[test]
    fn test_malformed_route_is_skipped_not_fatal() {
        let table = routes(&[("///", &["GET"]), ("/media", &["GET"])]);
        let skeleton = index_routes(&table, &IndexMap::new(), &IndexMap::new()).unwrap();

        assert_eq!(skeleton.len(), 1);
        assert!(skeleton.contains_key("media"));
    }

    #[test]
    fn test_blueprint_schema_params_only_on_write_methods() {
        let mut blueprint_docs = IndexMap::new();
        blueprint_docs.insert(
            "uploads".to_string(),
            BlueprintDoc {
                description: "file uploads".to_string(),
                schema: Some("media".to_string()),
            },
        );
        let mut domain_map: IndexMap<String, ResourceDescriptor> = IndexMap::new();
        domain_map.insert(
            "media".to_string(),
            serde_yaml::from_str("schema: {filename: {type: string}}").unwrap(),
        );

        let table = routes(&[("/uploads", &["GET", "POST", "PUT"])]);
        let skeleton = index_routes(&table, &blueprint_docs, &domain_map).unwrap();

        let methods = &skeleton["uploads"].paths["/uploads"];
        // GET never carries skeleton params
        assert!(methods[&Method::Get].params.is_none());
        let post_params = methods[&Method::Post].params.as_ref().unwrap();
        assert_eq!(post_params[0].name, "filename");
        assert!(methods[&Method::Put].params.is_some());
    }

    #[test]
    fn test_dangling_blueprint_alias_is_configuration_error() {
        let mut blueprint_docs = IndexMap::new();
        blueprint_docs.insert(
            "uploads".to_string(),
            BlueprintDoc {
                description: String::new(),
                schema: Some("missing".to_string()),
            },
        );
        let table = routes(&[("/uploads", &["POST"])]);
        let err = index_routes(&table, &blueprint_docs, &IndexMap::new()).unwrap_err();
        assert!(matches!(err, DocError::Configuration(_)));
    }
}
