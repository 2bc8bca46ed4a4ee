//! # Synchronizer — Snapshot and Restore
//!
//! Bidirectional conversion between the state container and plain
//! snapshots, without touching rendering. A snapshot addresses values
//! either by flat property identifier or by each descriptor's resolved
//! state path; both modes agree on value content and differ only in
//! container shape.
//!
//! Both directions are pure with respect to the descriptors and the
//! source; they mutate only their target. Restore always writes into the
//! `state` parameter it is given, falling back to the descriptor's
//! declared default when the snapshot lacks a value.

use genui_core::{assign_at, value_at, StateValue};
use genui_schema::{PropertyDescriptor, PropertyKind};

/// How snapshot values are addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressMode {
    /// Keyed by property identifier; nest subtrees become nested maps.
    Flat,
    /// Addressed by each descriptor's resolved state path, with missing
    /// intermediate containers created on write.
    Paths,
}

/// Walk `descriptors` and `state` into a fresh snapshot map.
pub fn snapshot(
    descriptors: &[PropertyDescriptor],
    state: &StateValue,
    mode: AddressMode,
) -> StateValue {
    let mut target = StateValue::map();
    snapshot_into(descriptors, state, &mut target, mode);
    target
}

/// Walk `descriptors` and `state`, writing each property's value into
/// `target`. For every non-trigger descriptor the value is `state[id]`
/// when present, else the descriptor's declared default.
pub fn snapshot_into(
    descriptors: &[PropertyDescriptor],
    state: &StateValue,
    target: &mut StateValue,
    mode: AddressMode,
) {
    for descriptor in descriptors {
        if skip_sync(&descriptor.kind) {
            continue;
        }
        let Ok(id) = descriptor.resolve_id() else {
            tracing::warn!(
                kind = descriptor.kind.name(),
                "descriptor has no identifier, skipping in snapshot"
            );
            continue;
        };

        if let PropertyKind::Nest(def) = &descriptor.kind {
            match mode {
                AddressMode::Flat => {
                    let mut subtree = StateValue::map();
                    snapshot_into(&def.children, state, &mut subtree, mode);
                    assign_at(target, &[id.to_string()], subtree);
                }
                // Paths are absolute; children write into the same target.
                AddressMode::Paths => snapshot_into(&def.children, state, target, mode),
            }
            continue;
        }

        let value = state
            .get(id)
            .cloned()
            .or_else(|| descriptor.default_value())
            .unwrap_or(StateValue::Null);
        match mode {
            AddressMode::Flat => assign_at(target, &[id.to_string()], value),
            AddressMode::Paths => {
                // Cannot fail: the identifier already resolved above.
                if let Ok(path) = descriptor.resolve_path() {
                    assign_at(target, &path, value);
                }
            }
        }
    }
}

/// The inverse of [`snapshot`]: walk `descriptors` and `source`, writing
/// each property's value into `state`. Values the source lacks fall back
/// to the descriptor's declared default.
pub fn restore(
    descriptors: &[PropertyDescriptor],
    source: &StateValue,
    state: &mut StateValue,
    mode: AddressMode,
) {
    let empty = StateValue::map();
    for descriptor in descriptors {
        if skip_sync(&descriptor.kind) {
            continue;
        }
        let Ok(id) = descriptor.resolve_id() else {
            tracing::warn!(
                kind = descriptor.kind.name(),
                "descriptor has no identifier, skipping in restore"
            );
            continue;
        };

        if let PropertyKind::Nest(def) = &descriptor.kind {
            match mode {
                AddressMode::Flat => {
                    let child_source = source.get(id).unwrap_or(&empty);
                    restore(&def.children, child_source, state, mode);
                }
                AddressMode::Paths => restore(&def.children, source, state, mode),
            }
            continue;
        }

        let found = match mode {
            AddressMode::Flat => source.get(id).cloned(),
            AddressMode::Paths => descriptor
                .resolve_path()
                .ok()
                .and_then(|path| value_at(source, &path).cloned()),
        };
        let value = found
            .or_else(|| descriptor.default_value())
            .unwrap_or(StateValue::Null);
        assign_at(state, &[id.to_string()], value);
    }
}

/// Trigger kinds never touch state; unknown kinds have no state shape.
fn skip_sync(kind: &PropertyKind) -> bool {
    kind.is_trigger() || matches!(kind, PropertyKind::Unknown(_))
}
