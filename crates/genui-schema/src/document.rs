//! # Schema Document Parsing
//!
//! A schema document is either a versioned wrapper
//! `{ "version": "...", "root": [descriptors...] }` or, in older schema
//! variants, a bare descriptor array. Both forms must be accepted; the
//! version is informational only.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::descriptor::PropertyDescriptor;
use crate::error::SchemaError;

/// A parsed schema document: an optional version tag and the ordered root
/// descriptor sequence. Order is significant — it determines display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Schema version from the wrapper form; `None` for bare arrays.
    pub version: Option<String>,
    /// Root property descriptors, in display order.
    pub root: Vec<PropertyDescriptor>,
}

#[derive(Deserialize)]
struct Wrapper {
    #[serde(default)]
    version: Option<String>,
    root: Vec<PropertyDescriptor>,
}

impl Document {
    /// Parse a document from a JSON value, accepting both the versioned
    /// wrapper and the bare-array form.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MalformedDocument`] for a JSON value that is
    /// neither an object nor an array, and [`SchemaError::Parse`] when a
    /// descriptor's `def` payload does not match its kind.
    pub fn from_json(value: JsonValue) -> Result<Self, SchemaError> {
        match value {
            JsonValue::Array(_) => Ok(Self {
                version: None,
                root: serde_json::from_value(value)?,
            }),
            JsonValue::Object(_) => {
                let wrapper: Wrapper = serde_json::from_value(value)?;
                Ok(Self {
                    version: wrapper.version,
                    root: wrapper.root,
                })
            }
            other => Err(SchemaError::MalformedDocument {
                found: json_type_name(&other).to_string(),
            }),
        }
    }

}

impl std::str::FromStr for Document {
    type Err = SchemaError;

    /// Parse a document from JSON text.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_json(serde_json::from_str(text)?)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        Self::from_json(value).map_err(serde::de::Error::custom)
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
