#![deny(missing_docs)]

//! # Endpoint Assembly
//!
//! Assembles all canonical paths of one resource: the collection path,
//! the item path addressed by the lookup field, and an optional
//! alternate-lookup path. Each path's methods are composed independently.

use crate::config::ResourceDescriptor;
use crate::error::{DocError, DocResult};
use crate::methods::{compose_methods, DomainContext};
use crate::models::{PathDoc, PathKind, ResourceDoc};
use crate::paths::{normalize, path_param};

/// Composes the full documentation of one resource.
///
/// The collection path comes from the resource's `url` override (or the
/// domain name), normalized so placeholder syntax is uniform; the item
/// path appends the lookup field as a `{placeholder}`.
pub fn compose_endpoint(
    ctx: DomainContext<'_>,
    domain: &str,
    resource: &ResourceDescriptor,
) -> DocResult<ResourceDoc> {
    let mut paths = PathDoc::new();

    let collection = normalize(&format!(
        "/{}",
        resource.url.as_deref().unwrap_or(domain)
    ));
    paths.insert(
        collection.clone(),
        compose_methods(ctx, domain, resource, PathKind::Collection, None)?,
    );

    let lookup = resource.item_lookup_field.as_deref().ok_or_else(|| {
        DocError::Configuration(format!(
            "resource '{}' is missing 'item_lookup_field'",
            domain
        ))
    })?;
    let item = format!("{}/{}", collection, path_param(lookup));
    paths.insert(
        item,
        compose_methods(ctx, domain, resource, PathKind::Item, None)?,
    );

    if let Some(alt) = &resource.additional_lookup {
        let alternate = format!("/{}/{}", domain, path_param(&alt.field));
        paths.insert(
            alternate,
            compose_methods(
                ctx,
                domain,
                resource,
                PathKind::AlternateLookup,
                Some(&alt.field),
            )?,
        );
    }

    Ok(ResourceDoc {
        description: resource.description.clone(),
        paths,
    })
}
