#![deny(missing_docs)]

//! # Method Composition
//!
//! Given a resource descriptor and a path kind, produces the supported
//! methods with a human label and the exact parameter list each method
//! accepts. Parameter policy, per method:
//!
//! | method | collection            | item                         |
//! |--------|-----------------------|------------------------------|
//! | GET    | none                  | identifier                   |
//! | POST   | full schema           | full schema                  |
//! | PATCH  | identifier + schema   | identifier + schema          |
//! | PUT    | none                  | identifier                   |
//! | DELETE | none                  | identifier                   |

use crate::config::{FieldMap, ResourceDescriptor};
use crate::error::{DocError, DocResult};
use crate::fields::flatten;
use crate::models::{FieldDescriptor, Method, MethodDoc, MethodMap, PathKind};
use indexmap::IndexMap;

/// Read-only view of the full descriptor map, threaded into label
/// generation so display titles can be looked up without ambient state.
pub type DomainContext<'a> = &'a IndexMap<String, ResourceDescriptor>;

/// The fixed verb of each documented method.
fn verb(method: Method) -> &'static str {
    match method {
        Method::Get => "retrieve",
        Method::Post => "create",
        Method::Patch => "update",
        Method::Put => "replace",
        Method::Delete => "delete",
    }
}

/// Builds the human label of a method on a path: `"{verb} {article} {noun}"`.
///
/// POST and every non-collection path speak about a single item ("a" +
/// display title); everything else speaks about the collection as a whole
/// ("all" + domain name).
pub fn label(
    ctx: DomainContext<'_>,
    domain: &str,
    kind: PathKind,
    method: Method,
) -> DocResult<String> {
    let (article, noun) = if method == Method::Post || kind != PathKind::Collection {
        let resource = ctx.get(domain).ok_or_else(|| {
            DocError::Configuration(format!(
                "domain '{}' not present in the descriptor map",
                domain
            ))
        })?;
        ("a", resource.title_for(domain))
    } else {
        ("all", domain.to_string())
    };
    Ok(format!("{} {} {}", verb(method), article, noun))
}

fn identifier(domain: &str, resource: &ResourceDescriptor) -> DocResult<FieldDescriptor> {
    let name = resource.item_lookup_field.as_deref().ok_or_else(|| {
        DocError::Configuration(format!(
            "resource '{}' is missing 'item_lookup_field'",
            domain
        ))
    })?;
    Ok(FieldDescriptor::identifier(name))
}

fn schema_of<'a>(domain: &str, resource: &'a ResourceDescriptor) -> DocResult<&'a FieldMap> {
    resource
        .schema
        .as_ref()
        .ok_or_else(|| DocError::Configuration(format!("resource '{}' is missing 'schema'", domain)))
}

/// Composes the documented methods of one path of a resource.
///
/// For `AlternateLookup` the result is exactly one GET whose params are the
/// looked-up field alone; otherwise the candidates come from the resource's
/// `item_methods`/`resource_methods` in author order.
pub fn compose_methods(
    ctx: DomainContext<'_>,
    domain: &str,
    resource: &ResourceDescriptor,
    kind: PathKind,
    alt_field: Option<&str>,
) -> DocResult<MethodMap> {
    let mut out = MethodMap::new();

    if kind == PathKind::AlternateLookup {
        let field = alt_field.ok_or_else(|| {
            DocError::Configuration(format!(
                "resource '{}': alternate lookup composed without a field",
                domain
            ))
        })?;
        let params = flatten(schema_of(domain, resource)?, Some(field))?;
        out.insert(
            Method::Get,
            MethodDoc {
                label: Some(label(ctx, domain, kind, Method::Get)?),
                params: Some(params),
            },
        );
        return Ok(out);
    }

    let candidates = if kind == PathKind::Item {
        &resource.item_methods
    } else {
        &resource.resource_methods
    };

    for &method in candidates {
        let params = match method {
            Method::Post => flatten(schema_of(domain, resource)?, None)?,
            Method::Patch => {
                let mut params = vec![identifier(domain, resource)?];
                params.extend(flatten(schema_of(domain, resource)?, None)?);
                params
            }
            _ if kind == PathKind::Item => vec![identifier(domain, resource)?],
            _ => Vec::new(),
        };
        out.insert(
            method,
            MethodDoc {
                label: Some(label(ctx, domain, kind, method)?),
                params: Some(params),
            },
        );
    }
    Ok(out)
}
