//! # StateValue — Generic Tree-of-Maps Value
//!
//! The single value type flowing through the panel engine. A `StateValue`
//! is either a scalar (`Null`, `Bool`, `Number`, `Text`), a nested `Map`,
//! or an `Action` — a zero-argument callable stored as a map member so that
//! trigger properties can bind directly against state.
//!
//! Conversion to and from `serde_json::Value` happens here, at the
//! interchange edge. `Action` members have no JSON representation: they are
//! skipped when serializing and can never be produced by deserialization.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde_json::Value as JsonValue;

/// A zero-argument callable stored in state or supplied by an actions
/// collaborator. `Rc<RefCell<..>>` because the same handler may be bound
/// to a control and still owned by the caller; panels are single-threaded.
pub type ActionFn = Rc<RefCell<dyn FnMut()>>;

/// Construct an [`ActionFn`] from a closure.
pub fn action<F: FnMut() + 'static>(f: F) -> ActionFn {
    Rc::new(RefCell::new(f))
}

/// Invoke an [`ActionFn`].
pub fn invoke(f: &ActionFn) {
    (*f.borrow_mut())();
}

/// A mutable, arbitrarily nested key-value tree.
///
/// This is the shape of panel state, of snapshots produced by the
/// synchronizer, and of the values flowing through commit callbacks.
#[derive(Clone, Default)]
pub enum StateValue {
    /// Absent / unset.
    #[default]
    Null,
    /// Boolean scalar (toggle properties).
    Bool(bool),
    /// Numeric scalar (float/int properties). All JSON numbers widen to f64.
    Number(f64),
    /// String scalar (text/color properties).
    Text(String),
    /// Nested container. Ordered by key for deterministic iteration.
    Map(BTreeMap<String, StateValue>),
    /// A callable member. Never serialized; compared by pointer identity.
    Action(ActionFn),
}

impl StateValue {
    /// An empty `Map`.
    pub fn map() -> Self {
        Self::Map(BTreeMap::new())
    }

    /// Returns true for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric payload, if this is a `Number`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String payload, if this is a `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Map payload, if this is a `Map`.
    pub fn as_map(&self) -> Option<&BTreeMap<String, StateValue>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Mutable map payload, if this is a `Map`.
    pub fn as_map_mut(&mut self) -> Option<&mut BTreeMap<String, StateValue>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Action payload, if this is an `Action`.
    pub fn as_action(&self) -> Option<&ActionFn> {
        match self {
            Self::Action(f) => Some(f),
            _ => None,
        }
    }

    /// Immediate member lookup (non-recursive). `None` unless this is a
    /// `Map` containing `key`.
    pub fn get(&self, key: &str) -> Option<&StateValue> {
        self.as_map().and_then(|m| m.get(key))
    }

    /// Convert a JSON value into a `StateValue`.
    ///
    /// Arrays have no state shape in the panel model and convert to `Null`;
    /// schema documents never place arrays at state positions.
    pub fn from_json(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(*b),
            JsonValue::Number(n) => n.as_f64().map(Self::Number).unwrap_or(Self::Null),
            JsonValue::String(s) => Self::Text(s.clone()),
            JsonValue::Object(obj) => Self::Map(
                obj.iter()
                    .map(|(k, v)| (k.clone(), Self::from_json(v)))
                    .collect(),
            ),
            JsonValue::Array(_) => Self::Null,
        }
    }

    /// Convert this value into JSON.
    ///
    /// Exact-integer numbers serialize as JSON integers so that values
    /// parsed from integer literals survive a snapshot round trip
    /// byte-identically. `Action` members are skipped inside maps and
    /// become `null` at the top level.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Number(n) => number_to_json(*n),
            Self::Text(s) => JsonValue::String(s.clone()),
            Self::Map(m) => JsonValue::Object(
                m.iter()
                    .filter(|(_, v)| !matches!(v, Self::Action(_)))
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Self::Action(_) => JsonValue::Null,
        }
    }
}

fn number_to_json(n: f64) -> JsonValue {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= i64::MAX as f64 {
        JsonValue::Number(serde_json::Number::from(n as i64))
    } else {
        serde_json::Number::from_f64(n)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null)
    }
}

impl fmt::Debug for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Map(m) => f.debug_tuple("Map").field(m).finish(),
            Self::Action(_) => write!(f, "Action(..)"),
        }
    }
}

impl PartialEq for StateValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            // Callables compare by identity, not behavior.
            (Self::Action(a), Self::Action(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for StateValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for StateValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for StateValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for StateValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(StateValue::from_json(&json!(null)), StateValue::Null);
        assert_eq!(StateValue::from_json(&json!(true)), StateValue::Bool(true));
        assert_eq!(StateValue::from_json(&json!(2.5)), StateValue::Number(2.5));
        assert_eq!(
            StateValue::from_json(&json!("hi")),
            StateValue::Text("hi".into())
        );
    }

    #[test]
    fn test_json_round_trip_preserves_integers() {
        let original = json!({"a": 5, "b": {"c": 0.5}, "d": "x"});
        let state = StateValue::from_json(&original);
        assert_eq!(state.to_json(), original);
    }

    #[test]
    fn test_actions_skipped_in_json_output() {
        let mut map = BTreeMap::new();
        map.insert("go".to_string(), StateValue::Action(action(|| {})));
        map.insert("n".to_string(), StateValue::Number(1.0));
        let json = StateValue::Map(map).to_json();
        assert_eq!(json, json!({"n": 1}));
    }

    #[test]
    fn test_action_equality_is_pointer_identity() {
        let a = action(|| {});
        let b = action(|| {});
        assert_eq!(StateValue::Action(a.clone()), StateValue::Action(a));
        let c = action(|| {});
        assert_ne!(StateValue::Action(b), StateValue::Action(c));
    }

    #[test]
    fn test_get_only_on_maps() {
        let v = StateValue::from_json(&serde_json::json!({"k": 7}));
        assert_eq!(v.get("k"), Some(&StateValue::Number(7.0)));
        assert_eq!(v.get("missing"), None);
        assert_eq!(StateValue::Number(1.0).get("k"), None);
    }
}
