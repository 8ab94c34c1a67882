#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `DocError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum DocError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A resource descriptor violates the input contract, e.g. a composed
    /// resource missing `item_lookup_field` or `schema`, or a blueprint
    /// schema alias naming an unknown domain.
    #[from(ignore)]
    #[display("Configuration Error: {_0}")]
    Configuration(String),

    /// A route pattern without a usable path segment. Reported per route;
    /// the offending route is skipped and indexing continues.
    #[from(ignore)]
    #[display("Malformed Route: {_0}")]
    MalformedRoute(String),

    /// A nested field schema exceeded the recursion depth bound, which is
    /// how self-referential schemas surface instead of looping forever.
    #[from(ignore)]
    #[display("Schema Cycle: {_0}")]
    SchemaCycle(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for DocError {}

/// Helper type alias for Result using DocError.
pub type DocResult<T> = Result<T, DocError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let doc_err: DocError = io_err.into();
        assert!(matches!(doc_err, DocError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // String defaults to General, not the contract-specific variants
        let msg = String::from("something wrong");
        let doc_err: DocError = msg.into();
        match doc_err {
            DocError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to DocError::General"),
        }
    }

    #[test]
    fn test_contract_variants_display() {
        let err = DocError::Configuration("missing 'schema'".into());
        assert_eq!(format!("{}", err), "Configuration Error: missing 'schema'");

        let err = DocError::SchemaCycle("at 'a.b.c'".into());
        assert_eq!(format!("{}", err), "Schema Cycle: at 'a.b.c'");
    }
}
