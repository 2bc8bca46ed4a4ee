//! Synchronizer tests: snapshot/restore round trips, flat vs path-mode
//! agreement, default fallback, and explicit statePath addressing.

use genui_core::{value_at, StateValue};
use genui_engine::{restore, snapshot, AddressMode};
use genui_schema::Document;
use serde_json::json;

fn descriptors(value: serde_json::Value) -> Vec<genui_schema::PropertyDescriptor> {
    Document::from_json(value)
        .expect("test schema should parse")
        .root
}

fn nested_schema() -> Vec<genui_schema::PropertyDescriptor> {
    descriptors(json!([
        {"kind": "float", "property": "speed", "def": {"current": 0.5}},
        {"kind": "toggle", "property": "on", "def": {"current": false}},
        {"kind": "nest", "property": "shape", "def": {
            "children": [
                {"kind": "int", "property": "sides", "def": {"current": 4}},
                {"kind": "nest", "property": "fill", "def": {
                    "children": [
                        {"kind": "color", "property": "tint", "def": {"current": "#000000"}}
                    ]
                }}
            ]
        }},
        {"kind": "action", "property": "go"}
    ]))
}

// ── Round trips ──────────────────────────────────────────────────────

#[test]
fn flat_restore_then_snapshot_reproduces_source() {
    let schema = nested_schema();
    let source = StateValue::from_json(&json!({
        "speed": 0.9,
        "on": true,
        "shape": {
            "sides": 6,
            "fill": {"tint": "#ff00ff"}
        }
    }));

    let mut state = StateValue::map();
    restore(&schema, &source, &mut state, AddressMode::Flat);
    let roundtrip = snapshot(&schema, &state, AddressMode::Flat);

    assert_eq!(roundtrip, source);
}

#[test]
fn flat_restore_populates_state_at_the_traversal_level() {
    let schema = nested_schema();
    let source = StateValue::from_json(&json!({
        "speed": 0.9,
        "on": true,
        "shape": {"sides": 6, "fill": {"tint": "#ff00ff"}}
    }));

    let mut state = StateValue::map();
    restore(&schema, &source, &mut state, AddressMode::Flat);

    // Nest children live flat in state, mirroring how traversal binds them.
    assert_eq!(
        state.to_json(),
        json!({"speed": 0.9, "on": true, "sides": 6, "tint": "#ff00ff"})
    );
}

#[test]
fn path_mode_round_trip_with_state_path_override() {
    let schema = descriptors(json!([
        {"kind": "int", "property": "depth", "statePath": ["camera", "depth"], "def": {"current": 3}},
        {"kind": "text", "property": "label", "def": {"current": "cam"}}
    ]));

    let source = StateValue::from_json(&json!({
        "camera": {"depth": 9},
        "label": "front"
    }));

    let mut state = StateValue::map();
    restore(&schema, &source, &mut state, AddressMode::Paths);
    // Restore writes state members by identifier, reading at the address.
    assert_eq!(state.to_json(), json!({"depth": 9, "label": "front"}));

    let roundtrip = snapshot(&schema, &state, AddressMode::Paths);
    assert_eq!(roundtrip, source);
}

// ── Mode agreement ───────────────────────────────────────────────────

#[test]
fn flat_and_path_snapshots_agree_on_values() {
    let schema = nested_schema();
    let state = StateValue::from_json(&json!({
        "speed": 0.7,
        "on": true,
        "sides": 8,
        "tint": "#123456"
    }));

    let flat = snapshot(&schema, &state, AddressMode::Flat);
    let paths = snapshot(&schema, &state, AddressMode::Paths);

    // Same value content; only the container shape differs. Without
    // statePath overrides, path addresses are bare identifiers.
    let flat_pairs = [
        ("speed", value_at(&flat, &["speed".to_string()])),
        ("on", value_at(&flat, &["on".to_string()])),
        (
            "sides",
            value_at(&flat, &["shape".to_string(), "sides".to_string()]),
        ),
        (
            "tint",
            value_at(
                &flat,
                &[
                    "shape".to_string(),
                    "fill".to_string(),
                    "tint".to_string(),
                ],
            ),
        ),
    ];
    for (id, flat_value) in flat_pairs {
        let path_value = value_at(&paths, &[id.to_string()]);
        assert_eq!(flat_value, path_value, "value mismatch for '{id}'");
    }
}

// ── Default fallback ─────────────────────────────────────────────────

#[test]
fn snapshot_falls_back_to_declared_defaults() {
    let schema = nested_schema();
    let empty = StateValue::map();

    let snap = snapshot(&schema, &empty, AddressMode::Flat);
    assert_eq!(
        snap.to_json(),
        json!({
            "speed": 0.5,
            "on": false,
            "shape": {"sides": 4, "fill": {"tint": "#000000"}}
        })
    );
}

#[test]
fn restore_falls_back_to_declared_defaults() {
    let schema = nested_schema();
    // Source supplies only one field; everything else defaults.
    let source = StateValue::from_json(&json!({"speed": 0.1}));

    let mut state = StateValue::map();
    restore(&schema, &source, &mut state, AddressMode::Flat);

    assert_eq!(
        state.to_json(),
        json!({"speed": 0.1, "on": false, "sides": 4, "tint": "#000000"})
    );
}

// ── Exclusions ───────────────────────────────────────────────────────

#[test]
fn triggers_and_unknown_kinds_never_appear_in_snapshots() {
    let schema = descriptors(json!([
        {"kind": "action", "property": "go"},
        {"kind": "progress", "property": "load"},
        {"kind": "gradient", "property": "fade"},
        {"kind": "hologram", "property": "h"},
        {"kind": "int", "property": "n", "def": {"current": 1}}
    ]));

    let state = StateValue::map();
    let snap = snapshot(&schema, &state, AddressMode::Flat);
    assert_eq!(snap.to_json(), json!({"n": 1}));

    let mut restored = StateValue::map();
    restore(
        &schema,
        &StateValue::from_json(&json!({"go": "bogus", "n": 2})),
        &mut restored,
        AddressMode::Flat,
    );
    assert_eq!(restored.to_json(), json!({"n": 2}));
}

#[test]
fn xy_snapshots_as_a_pair() {
    let schema = descriptors(json!([
        {"kind": "xy", "property": "pt", "def": {
            "x": {"current": 1.0}, "y": {"current": 2.0}
        }}
    ]));

    let empty = StateValue::map();
    let snap = snapshot(&schema, &empty, AddressMode::Flat);
    assert_eq!(snap.to_json(), json!({"pt": {"x": 1, "y": 2}}));

    let mut state = StateValue::map();
    restore(
        &schema,
        &StateValue::from_json(&json!({"pt": {"x": 5, "y": 6}})),
        &mut state,
        AddressMode::Flat,
    );
    let snap = snapshot(&schema, &state, AddressMode::Flat);
    assert_eq!(snap.to_json(), json!({"pt": {"x": 5, "y": 6}}));
}

#[test]
fn path_mode_creates_missing_intermediate_containers() {
    let schema = descriptors(json!([
        {"kind": "int", "property": "v", "statePath": ["a", "b", "c"], "def": {"current": 2}}
    ]));

    let empty = StateValue::map();
    let snap = snapshot(&schema, &empty, AddressMode::Paths);
    assert_eq!(snap.to_json(), json!({"a": {"b": {"c": 2}}}));
}
