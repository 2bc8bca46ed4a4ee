//! Error types for schema parsing and descriptor resolution.

use thiserror::Error;

/// Errors raised by the schema data model.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Descriptor has neither a `property` nor a `name` field.
    #[error("descriptor of kind '{kind}' has no 'property' or 'name' identifier")]
    MissingIdentifier {
        /// Kind of the offending descriptor.
        kind: String,
    },

    /// Document is neither a versioned wrapper object nor a bare root array.
    #[error("schema document must be an object with a 'root' array or a bare array, got {found}")]
    MalformedDocument {
        /// JSON type name of what was found instead.
        found: String,
    },

    /// JSON parsing or def-payload conversion failed.
    #[error("schema parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
