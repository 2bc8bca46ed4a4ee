//! # PropertyDescriptor — One Schema Node
//!
//! A descriptor pairs an identifier with a [`PropertyKind`] carrying the
//! kind-specific `def` payload. Parsing goes through a raw helper struct so
//! that unrecognized kinds become [`PropertyKind::Unknown`] instead of a
//! deserialization failure — resolution failures are the dispatcher's
//! business, not the parser's.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use genui_core::StateValue;

use crate::error::SchemaError;

/// Bounded numeric definition, shared by `float`, `int`, and the axes of
/// `xy`. Absent bounds leave the editor unbounded.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct NumberDef {
    pub current: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

/// String definition for `text` and `color` properties.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TextDef {
    pub current: String,
}

/// Boolean definition for `toggle` properties.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ToggleDef {
    pub current: bool,
}

/// One selectable entry of a `select`/`choice` property. The optional
/// `name` is display-only; the committed value is always `value`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChoiceEntry {
    #[serde(default)]
    pub name: Option<String>,
    pub value: JsonValue,
}

/// Definition for `select`/`choice` properties.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ChoiceDef {
    pub current: JsonValue,
    pub values: Vec<ChoiceEntry>,
}

/// Definition for `xy` properties: two independent bounded axes.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct XyDef {
    pub x: NumberDef,
    pub y: NumberDef,
}

/// Definition for `nest` properties: an ordered child subtree, an initial
/// open/closed flag, and an optional redirect key. When `nest` is set the
/// children bind against `state[nest]` instead of the parent's state level.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct NestDef {
    pub children: Vec<PropertyDescriptor>,
    pub expand: bool,
    pub nest: Option<String>,
}

/// The closed set of property kinds, each carrying its `def` payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
    /// Enumeration (`select` or `choice` in the wire format).
    Select(ChoiceDef),
    /// Floating-point number with optional bounds.
    Float(NumberDef),
    /// Integer number with optional bounds.
    Int(NumberDef),
    /// Free-form string.
    Text(TextDef),
    /// Color string.
    Color(TextDef),
    /// Boolean.
    Toggle(ToggleDef),
    /// 2D point with independently bounded axes.
    Xy(XyDef),
    /// Nested group of child descriptors.
    Nest(NestDef),
    /// Triggerable action. Never stored in state.
    Action,
    /// Trigger variant rendered as a progress affordance.
    Progress,
    /// Trigger variant rendered as a gradient affordance.
    Gradient,
    /// Anything the wire format names that this engine does not know.
    /// Dispatch degrades by omission; the original kind string is kept
    /// for diagnostics.
    Unknown(String),
}

impl PropertyKind {
    fn from_raw(kind: &str, def: JsonValue) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            "select" | "choice" => Self::Select(payload(def)?),
            "float" => Self::Float(payload(def)?),
            "int" => Self::Int(payload(def)?),
            "text" => Self::Text(payload(def)?),
            "color" => Self::Color(payload(def)?),
            "toggle" => Self::Toggle(payload(def)?),
            "xy" => Self::Xy(payload(def)?),
            "nest" => Self::Nest(payload(def)?),
            "action" => Self::Action,
            "progress" => Self::Progress,
            "gradient" => Self::Gradient,
            other => Self::Unknown(other.to_string()),
        })
    }

    /// Wire-format name of this kind, for diagnostics.
    pub fn name(&self) -> &str {
        match self {
            Self::Select(_) => "select",
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::Color(_) => "color",
            Self::Toggle(_) => "toggle",
            Self::Xy(_) => "xy",
            Self::Nest(_) => "nest",
            Self::Action => "action",
            Self::Progress => "progress",
            Self::Gradient => "gradient",
            Self::Unknown(k) => k,
        }
    }

    /// True for the three trigger kinds, which resolve against an actions
    /// collaborator and never touch state.
    pub fn is_trigger(&self) -> bool {
        matches!(self, Self::Action | Self::Progress | Self::Gradient)
    }
}

/// A `def` payload that may be absent entirely.
fn payload<T: DeserializeOwned + Default>(def: JsonValue) -> Result<T, serde_json::Error> {
    if def.is_null() {
        Ok(T::default())
    } else {
        serde_json::from_value(def)
    }
}

/// One node of a panel schema.
///
/// Immutable after parse. The identifier is `property` when present, else
/// `name`; the display label is `name` when present, else `property`.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    /// Kind tag with the kind-specific `def` payload.
    pub kind: PropertyKind,
    /// Preferred identifier.
    pub property: Option<String>,
    /// Display name; identifier fallback.
    pub name: Option<String>,
    /// Reserved. Parsed but has no effect on commit semantics.
    pub live: bool,
    /// Explicit state address overriding the identifier-derived one.
    pub state_path: Option<Vec<String>>,
}

impl PropertyDescriptor {
    /// Stable identifier of this property: `property` preferred, `name`
    /// accepted as a synonym.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MissingIdentifier`] when neither field is
    /// present. Dispatch treats that as a non-fatal resolution failure.
    pub fn resolve_id(&self) -> Result<&str, SchemaError> {
        self.property
            .as_deref()
            .or(self.name.as_deref())
            .ok_or_else(|| SchemaError::MissingIdentifier {
                kind: self.kind.name().to_string(),
            })
    }

    /// Display label: `name`, falling back to the identifier.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.property.as_deref())
            .unwrap_or("")
    }

    /// Address of this property inside a nested state object: the declared
    /// `statePath` when present, else a single-element address holding the
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MissingIdentifier`] when no `statePath` is
    /// declared and the descriptor has no identifier.
    pub fn resolve_path(&self) -> Result<Vec<String>, SchemaError> {
        if let Some(path) = &self.state_path {
            return Ok(path.clone());
        }
        Ok(vec![self.resolve_id()?.to_string()])
    }

    /// The default value this descriptor materializes into state: the
    /// declared `def.current` (the `{x, y}` pair for `xy`). `None` for
    /// nest, trigger, and unknown kinds, which have no scalar default.
    pub fn default_value(&self) -> Option<StateValue> {
        match &self.kind {
            PropertyKind::Select(def) => Some(StateValue::from_json(&def.current)),
            PropertyKind::Float(def) | PropertyKind::Int(def) => {
                Some(StateValue::Number(def.current))
            }
            PropertyKind::Text(def) | PropertyKind::Color(def) => {
                Some(StateValue::Text(def.current.clone()))
            }
            PropertyKind::Toggle(def) => Some(StateValue::Bool(def.current)),
            PropertyKind::Xy(def) => {
                let mut pair = std::collections::BTreeMap::new();
                pair.insert("x".to_string(), StateValue::Number(def.x.current));
                pair.insert("y".to_string(), StateValue::Number(def.y.current));
                Some(StateValue::Map(pair))
            }
            PropertyKind::Nest(_)
            | PropertyKind::Action
            | PropertyKind::Progress
            | PropertyKind::Gradient
            | PropertyKind::Unknown(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct RawDescriptor {
    kind: String,
    #[serde(default)]
    property: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    def: JsonValue,
    #[serde(default)]
    live: bool,
    #[serde(default, rename = "statePath")]
    state_path: Option<Vec<String>>,
}

impl<'de> Deserialize<'de> for PropertyDescriptor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawDescriptor::deserialize(deserializer)?;
        let kind = PropertyKind::from_raw(&raw.kind, raw.def).map_err(|e| {
            serde::de::Error::custom(format!("invalid def for kind '{}': {e}", raw.kind))
        })?;
        Ok(Self {
            kind,
            property: raw.property,
            name: raw.name,
            live: raw.live,
            state_path: raw.state_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: JsonValue) -> PropertyDescriptor {
        serde_json::from_value(value).expect("descriptor should parse")
    }

    #[test]
    fn test_parse_float_descriptor() {
        let desc = parse(json!({
            "kind": "float",
            "property": "speed",
            "name": "Speed",
            "def": {"current": 0.5, "min": 0.0, "max": 1.0, "step": 0.01}
        }));
        assert_eq!(desc.resolve_id().unwrap(), "speed");
        assert_eq!(desc.label(), "Speed");
        match &desc.kind {
            PropertyKind::Float(def) => {
                assert_eq!(def.current, 0.5);
                assert_eq!(def.min, Some(0.0));
                assert_eq!(def.max, Some(1.0));
                assert_eq!(def.step, Some(0.01));
            }
            other => panic!("expected Float, got {other:?}"),
        }
    }

    #[test]
    fn test_choice_is_synonym_for_select() {
        let desc = parse(json!({
            "kind": "choice",
            "name": "mode",
            "def": {"current": "a", "values": [{"value": "a"}, {"name": "Bee", "value": "b"}]}
        }));
        match &desc.kind {
            PropertyKind::Select(def) => {
                assert_eq!(def.values.len(), 2);
                assert_eq!(def.values[1].name.as_deref(), Some("Bee"));
            }
            other => panic!("expected Select, got {other:?}"),
        }
    }

    #[test]
    fn test_property_preferred_over_name() {
        let desc = parse(json!({
            "kind": "toggle",
            "property": "enabled",
            "name": "Enabled?",
            "def": {"current": true}
        }));
        assert_eq!(desc.resolve_id().unwrap(), "enabled");
        assert_eq!(desc.label(), "Enabled?");
    }

    #[test]
    fn test_name_alone_serves_as_identifier() {
        let desc = parse(json!({"kind": "text", "name": "title", "def": {"current": "hi"}}));
        assert_eq!(desc.resolve_id().unwrap(), "title");
    }

    #[test]
    fn test_missing_identifier_fails_resolution() {
        let desc = parse(json!({"kind": "text", "def": {"current": ""}}));
        let err = desc.resolve_id().unwrap_err();
        assert!(matches!(err, SchemaError::MissingIdentifier { .. }));
    }

    #[test]
    fn test_unknown_kind_parses() {
        let desc = parse(json!({"kind": "hologram", "property": "h", "def": {"weird": 1}}));
        assert_eq!(desc.kind, PropertyKind::Unknown("hologram".to_string()));
        assert_eq!(desc.kind.name(), "hologram");
    }

    #[test]
    fn test_trigger_kinds_have_no_def() {
        for kind in ["action", "progress", "gradient"] {
            let desc = parse(json!({"kind": kind, "property": "go"}));
            assert!(desc.kind.is_trigger());
            assert_eq!(desc.default_value(), None);
        }
    }

    #[test]
    fn test_state_path_overrides_identifier_address() {
        let desc = parse(json!({
            "kind": "int",
            "property": "depth",
            "statePath": ["camera", "depth"],
            "def": {"current": 3}
        }));
        assert_eq!(
            desc.resolve_path().unwrap(),
            vec!["camera".to_string(), "depth".to_string()]
        );
    }

    #[test]
    fn test_default_path_is_identifier() {
        let desc = parse(json!({"kind": "int", "property": "depth", "def": {"current": 3}}));
        assert_eq!(desc.resolve_path().unwrap(), vec!["depth".to_string()]);
    }

    #[test]
    fn test_xy_default_value_is_pair() {
        let desc = parse(json!({
            "kind": "xy",
            "property": "pt",
            "def": {
                "x": {"current": 1.0, "min": 0.0, "max": 10.0, "step": 1.0},
                "y": {"current": 2.0, "min": 0.0, "max": 10.0, "step": 1.0}
            }
        }));
        let pair = desc.default_value().unwrap();
        assert_eq!(pair.get("x"), Some(&StateValue::Number(1.0)));
        assert_eq!(pair.get("y"), Some(&StateValue::Number(2.0)));
    }

    #[test]
    fn test_nest_parses_children_recursively() {
        let desc = parse(json!({
            "kind": "nest",
            "property": "group",
            "def": {
                "expand": true,
                "children": [
                    {"kind": "int", "property": "v", "def": {"current": 5}}
                ]
            }
        }));
        match &desc.kind {
            PropertyKind::Nest(def) => {
                assert!(def.expand);
                assert_eq!(def.nest, None);
                assert_eq!(def.children.len(), 1);
                assert_eq!(def.children[0].resolve_id().unwrap(), "v");
            }
            other => panic!("expected Nest, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_def_falls_back_to_defaults() {
        let desc = parse(json!({"kind": "toggle", "property": "flag"}));
        assert_eq!(desc.default_value(), Some(StateValue::Bool(false)));
    }

    #[test]
    fn test_live_flag_is_parsed_but_inert() {
        let desc = parse(json!({
            "kind": "float", "property": "speed", "live": true, "def": {"current": 0.1}
        }));
        assert!(desc.live);
    }
}
