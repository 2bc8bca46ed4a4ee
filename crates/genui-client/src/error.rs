//! Error types for schema fetching.
//!
//! Transport failures are fatal to a render attempt and reported once to
//! the caller; no partial panel is built and nothing is retried.

use thiserror::Error;

use crate::config::ConfigError;

/// Error during schema fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Client configuration was invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The document name did not produce a valid request URL.
    #[error("invalid schema name '{name}': {reason}")]
    InvalidName {
        /// Requested document name.
        name: String,
        /// Why the URL could not be formed.
        reason: String,
    },

    /// The request could not be sent or the response body not read.
    #[error("transport error fetching schema '{name}': {source}")]
    Http {
        /// Requested document name.
        name: String,
        /// Underlying transport error.
        source: reqwest::Error,
    },

    /// The source answered with a non-success status.
    #[error("schema source returned {status} for '{name}': {body}")]
    Status {
        /// Requested document name.
        name: String,
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The response body was not a well-formed schema document.
    #[error("malformed schema document '{name}': {source}")]
    Malformed {
        /// Requested document name.
        name: String,
        /// Underlying parse error.
        source: genui_schema::SchemaError,
    },
}
