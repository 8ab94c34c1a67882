#![deny(missing_docs)]

//! # Path Normalization
//!
//! Converts raw route patterns with typed placeholder syntax
//! (`<converter:name>` or `<name>`) into canonical templates using
//! `{name}` placeholders. Synthesized paths (item path, alternate
//! lookup) go through the same placeholder wrapping so path syntax is
//! uniform regardless of origin.

use regex::Regex;
use std::sync::OnceLock;

/// Matches a typed placeholder token, capturing the logical name and
/// discarding any converter prefix.
fn placeholder_re() -> &'static Regex {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_RE.get_or_init(|| Regex::new(r"<(?:[^>]+:)?([^>]+)>").expect("Invalid regex"))
}

/// Rewrites every `<converter:name>` / `<name>` token to `{name}`.
///
/// A pure string rewrite; characters outside placeholder tokens are left
/// untouched.
pub fn normalize(raw: &str) -> String {
    placeholder_re().replace_all(raw, "{$1}").into_owned()
}

/// Wraps a bare field name as a `{name}` path placeholder.
pub fn path_param(name: &str) -> String {
    format!("{{{}}}", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_strips_converter_prefix() {
        assert_eq!(
            normalize("/people/<string:id>/addresses"),
            "/people/{id}/addresses"
        );
    }

    #[test]
    fn test_normalize_handles_untyped_placeholders() {
        assert_eq!(normalize("/people/<id>"), "/people/{id}");
    }

    #[test]
    fn test_normalize_rewrites_every_token() {
        assert_eq!(
            normalize("/<string:a>/x/<int:b>/<c>"),
            "/{a}/x/{b}/{c}"
        );
    }

    #[test]
    fn test_normalize_leaves_plain_paths_alone() {
        assert_eq!(normalize("/people"), "/people");
    }

    #[test]
    fn test_path_param_wraps_in_braces() {
        assert_eq!(path_param("lastname"), "{lastname}");
    }
}
