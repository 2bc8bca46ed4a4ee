//! # Address-Based Get/Set
//!
//! Reads and writes into a [`StateValue`] tree given an address — a
//! sequence of map keys. This is the one utility behind both the path
//! resolver (descriptors may declare an explicit `statePath`) and the
//! path-addressed snapshot mode of the synchronizer.
//!
//! ## Semantics
//!
//! - Reads never allocate and return `None` for any missing level.
//! - Writes create every missing intermediate level as an empty `Map`.
//!   A non-map value sitting where an intermediate container is needed is
//!   replaced by a `Map`; the write always lands.
//! - The empty address is a no-op for writes and resolves to the root for
//!   reads.

use crate::value::StateValue;

/// Resolve `path` inside `root`, returning the value at that address.
///
/// The empty path resolves to `root` itself.
pub fn value_at<'a>(root: &'a StateValue, path: &[String]) -> Option<&'a StateValue> {
    let mut focus = root;
    for key in path {
        focus = focus.get(key)?;
    }
    Some(focus)
}

/// Write `value` at `path` inside `root`, creating intermediate `Map`
/// levels as needed. The empty path is a no-op.
pub fn assign_at(root: &mut StateValue, path: &[String], value: StateValue) {
    let Some((last, intermediate)) = path.split_last() else {
        return;
    };

    let mut focus = root;
    for key in intermediate {
        let map = ensure_map(focus);
        let entry = map
            .entry(key.clone())
            .or_insert_with(StateValue::map);
        if !matches!(entry, StateValue::Map(_)) {
            *entry = StateValue::map();
        }
        focus = entry;
    }

    ensure_map(focus).insert(last.clone(), value);
}

fn ensure_map(value: &mut StateValue) -> &mut std::collections::BTreeMap<String, StateValue> {
    if !matches!(value, StateValue::Map(_)) {
        *value = StateValue::map();
    }
    match value {
        StateValue::Map(m) => m,
        // ensure_map just made this a Map.
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_value_at_nested() {
        let root = StateValue::from_json(&json!({"a": {"b": {"c": 42}}}));
        let found = value_at(&root, &path(&["a", "b", "c"]));
        assert_eq!(found, Some(&StateValue::Number(42.0)));
    }

    #[test]
    fn test_value_at_missing_level() {
        let root = StateValue::from_json(&json!({"a": {"b": 1}}));
        assert_eq!(value_at(&root, &path(&["a", "x", "c"])), None);
    }

    #[test]
    fn test_value_at_empty_path_is_root() {
        let root = StateValue::Number(3.0);
        assert_eq!(value_at(&root, &[]), Some(&root));
    }

    #[test]
    fn test_assign_at_creates_intermediates() {
        let mut root = StateValue::map();
        assign_at(&mut root, &path(&["a", "b", "c"]), StateValue::Number(7.0));
        assert_eq!(root.to_json(), json!({"a": {"b": {"c": 7}}}));
    }

    #[test]
    fn test_assign_at_replaces_scalar_intermediate() {
        let mut root = StateValue::from_json(&json!({"a": 1}));
        assign_at(&mut root, &path(&["a", "b"]), StateValue::Bool(true));
        assert_eq!(root.to_json(), json!({"a": {"b": true}}));
    }

    #[test]
    fn test_assign_at_empty_path_is_noop() {
        let mut root = StateValue::from_json(&json!({"a": 1}));
        assign_at(&mut root, &[], StateValue::Number(9.0));
        assert_eq!(root.to_json(), json!({"a": 1}));
    }

    #[test]
    fn test_assign_at_preserves_siblings() {
        let mut root = StateValue::from_json(&json!({"a": {"keep": 1}}));
        assign_at(&mut root, &path(&["a", "b"]), StateValue::Number(2.0));
        assert_eq!(root.to_json(), json!({"a": {"keep": 1, "b": 2}}));
    }
}
