//! # SharedState — The Panel's Mutable State Container
//!
//! The single mutable entity in the system. Constructed empty (or from a
//! JSON value), populated with descriptor defaults during traversal, then
//! mutated in place for the rest of the session by commit callbacks from
//! edited controls and by explicit restore calls.
//!
//! `Rc<RefCell<..>>` sharing is deliberate: the traversal engine and the
//! live rendering controls both hold handles to the same tree, and the
//! host's event loop guarantees they never write concurrently.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use serde_json::Value as JsonValue;

use crate::path;
use crate::value::StateValue;

/// Shared handle to a panel's state tree.
#[derive(Clone, Debug)]
pub struct SharedState(Rc<RefCell<StateValue>>);

impl SharedState {
    /// An empty state container (an empty `Map`).
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(StateValue::map())))
    }

    /// Wrap an existing value tree.
    pub fn from_value(value: StateValue) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Build a state container from a JSON value.
    pub fn from_json(json: &JsonValue) -> Self {
        Self::from_value(StateValue::from_json(json))
    }

    /// Serialize the current state tree to JSON. Action members are skipped.
    pub fn to_json(&self) -> JsonValue {
        self.0.borrow().to_json()
    }

    /// Borrow the underlying tree for reading.
    pub fn value(&self) -> Ref<'_, StateValue> {
        self.0.borrow()
    }

    /// Borrow the underlying tree for writing.
    pub fn value_mut(&self) -> RefMut<'_, StateValue> {
        self.0.borrow_mut()
    }

    /// Clone of the member at `key` on the root map.
    pub fn get(&self, key: &str) -> Option<StateValue> {
        self.0.borrow().get(key).cloned()
    }

    /// Write `value` at `key` on the root map.
    pub fn set(&self, key: &str, value: StateValue) {
        path::assign_at(&mut self.0.borrow_mut(), &[key.to_string()], value);
    }

    /// Clone of the value at the given address.
    pub fn get_at(&self, path: &[String]) -> Option<StateValue> {
        path::value_at(&self.0.borrow(), path).cloned()
    }

    /// Write `value` at the given address, creating intermediate levels.
    pub fn set_at(&self, path: &[String], value: StateValue) {
        path::assign_at(&mut self.0.borrow_mut(), path, value);
    }

    /// True if the root map has a member named `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.0.borrow().get(key).is_some()
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_is_empty_map() {
        let state = SharedState::new();
        assert_eq!(state.to_json(), json!({}));
    }

    #[test]
    fn test_set_then_get() {
        let state = SharedState::new();
        state.set("speed", StateValue::Number(0.8));
        assert_eq!(state.get("speed"), Some(StateValue::Number(0.8)));
        assert!(state.contains("speed"));
        assert!(!state.contains("missing"));
    }

    #[test]
    fn test_set_at_creates_nesting() {
        let state = SharedState::new();
        state.set_at(
            &["outer".to_string(), "inner".to_string()],
            StateValue::Bool(true),
        );
        assert_eq!(state.to_json(), json!({"outer": {"inner": true}}));
    }

    #[test]
    fn test_clones_share_the_same_tree() {
        let state = SharedState::new();
        let alias = state.clone();
        alias.set("k", StateValue::Text("v".into()));
        assert_eq!(state.get("k"), Some(StateValue::Text("v".into())));
    }
}
