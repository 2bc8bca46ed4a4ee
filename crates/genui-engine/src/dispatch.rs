//! # Property Dispatcher
//!
//! The recursive core: given one property descriptor, the (sub-)state it
//! should bind against, an actions collaborator, and the caller's update
//! handler, produce a control binding by delegating to the rendering
//! backend — or nothing at all, when resolution fails.
//!
//! Dispatch writes the descriptor's default value into state before
//! creating controls; trigger kinds never touch state. All resolution
//! failures (missing identifier, missing action handler, unknown kind)
//! degrade by omission with a warning.

use std::collections::BTreeMap;

use genui_core::{ActionFn, SharedState, StateValue};
use genui_schema::{NumberDef, PropertyDescriptor, PropertyKind};

use crate::actions::Actions;
use crate::backend::{Control, FieldWidget, Scope, SelectOption, UpdateFn};
use crate::walk::{walk, Binding, ControlHandle};

/// Where a descriptor binds: the shared state plus a base address. The
/// root target has an empty base; a `nest` redirect pushes its key onto
/// the base for the subtree's children. This is the one place binding
/// target and schema position diverge.
#[derive(Debug, Clone)]
pub struct BindTarget {
    state: SharedState,
    base: Vec<String>,
}

impl BindTarget {
    /// Target binding directly against the root of `state`.
    pub fn root(state: SharedState) -> Self {
        Self {
            state,
            base: Vec::new(),
        }
    }

    /// Target binding one level down, under `key`. Applied once per
    /// redirect; deeper nests without their own redirect keep inheriting
    /// this same target.
    pub fn child(&self, key: &str) -> Self {
        let mut base = self.base.clone();
        base.push(key.to_string());
        Self {
            state: self.state.clone(),
            base,
        }
    }

    /// The shared state this target writes into.
    pub fn state(&self) -> &SharedState {
        &self.state
    }

    /// Full address of the member named `key` at this target.
    pub fn path_of(&self, key: &str) -> Vec<String> {
        let mut path = self.base.clone();
        path.push(key.to_string());
        path
    }

    /// Write the member named `key`, creating intermediate levels.
    pub fn write(&self, key: &str, value: StateValue) {
        self.state.set_at(&self.path_of(key), value);
    }

    /// Clone of the member named `key`, if present.
    pub fn member(&self, key: &str) -> Option<StateValue> {
        self.state.get_at(&self.path_of(key))
    }
}

/// Dispatch one descriptor into `scope`, returning the identifier and its
/// binding — or `None` when the property resolves to nothing.
pub fn dispatch(
    scope: &mut dyn Scope,
    descriptor: &PropertyDescriptor,
    target: &BindTarget,
    actions: &Actions,
    update: &UpdateFn,
) -> Option<(String, Binding)> {
    let id = match descriptor.resolve_id() {
        Ok(id) => id.to_string(),
        Err(_) => {
            tracing::warn!(
                kind = descriptor.kind.name(),
                "descriptor has no identifier, skipping"
            );
            return None;
        }
    };
    let label = descriptor.label();

    match &descriptor.kind {
        PropertyKind::Select(def) => {
            target.write(&id, StateValue::from_json(&def.current));
            let options = def
                .values
                .iter()
                .map(|entry| SelectOption {
                    label: entry.name.clone(),
                    value: StateValue::from_json(&entry.value),
                })
                .collect();
            let control = leaf(
                scope.add_field(
                    target.state().clone(),
                    &target.path_of(&id),
                    FieldWidget::Select { options },
                ),
                label,
                &id,
                update,
            );
            Some((id, control))
        }

        PropertyKind::Float(def) | PropertyKind::Int(def) => {
            target.write(&id, StateValue::Number(def.current));
            let control = leaf(
                scope.add_field(
                    target.state().clone(),
                    &target.path_of(&id),
                    number_widget(def),
                ),
                label,
                &id,
                update,
            );
            Some((id, control))
        }

        PropertyKind::Text(def) => {
            target.write(&id, StateValue::Text(def.current.clone()));
            let control = leaf(
                scope.add_field(
                    target.state().clone(),
                    &target.path_of(&id),
                    FieldWidget::Text,
                ),
                label,
                &id,
                update,
            );
            Some((id, control))
        }

        PropertyKind::Color(def) => {
            target.write(&id, StateValue::Text(def.current.clone()));
            let control = leaf(
                scope.add_color_field(target.state().clone(), &target.path_of(&id)),
                label,
                &id,
                update,
            );
            Some((id, control))
        }

        PropertyKind::Toggle(def) => {
            target.write(&id, StateValue::Bool(def.current));
            let control = leaf(
                scope.add_field(
                    target.state().clone(),
                    &target.path_of(&id),
                    FieldWidget::Toggle,
                ),
                label,
                &id,
                update,
            );
            Some((id, control))
        }

        PropertyKind::Xy(def) => {
            let mut pair = BTreeMap::new();
            pair.insert("x".to_string(), StateValue::Number(def.x.current));
            pair.insert("y".to_string(), StateValue::Number(def.y.current));
            target.write(&id, StateValue::Map(pair));

            let mut group = scope.add_group(label, false);
            let mut children = BTreeMap::new();
            for (axis, axis_def) in [("x", &def.x), ("y", &def.y)] {
                let mut path = target.path_of(&id);
                path.push(axis.to_string());
                let mut control =
                    group.add_field(target.state().clone(), &path, number_widget(axis_def));
                control.set_label(label);
                control.on_commit(axis_commit(&id, axis, update));
                children.insert(
                    axis.to_string(),
                    Binding {
                        control: ControlHandle::Leaf(control),
                        children: None,
                    },
                );
            }
            Some((
                id,
                Binding {
                    control: ControlHandle::Group(group),
                    children: Some(children),
                },
            ))
        }

        PropertyKind::Nest(def) => {
            let mut group = scope.add_group(label, def.expand);
            let child_target = match &def.nest {
                Some(redirect) => target.child(redirect),
                None => target.clone(),
            };
            let children = walk(group.as_mut(), &def.children, &child_target, actions, update);
            Some((
                id,
                Binding {
                    control: ControlHandle::Group(group),
                    children: Some(children),
                },
            ))
        }

        PropertyKind::Action | PropertyKind::Progress | PropertyKind::Gradient => {
            match resolve_trigger(actions, &id, target) {
                Some(handler) => {
                    let mut control = scope.add_trigger(&id, handler);
                    control.set_label(label);
                    Some((
                        id,
                        Binding {
                            control: ControlHandle::Leaf(control),
                            children: None,
                        },
                    ))
                }
                None => {
                    tracing::warn!(
                        property = %id,
                        "no action handler resolved for trigger property, skipping"
                    );
                    None
                }
            }
        }

        PropertyKind::Unknown(kind) => {
            tracing::warn!(kind = %kind, property = %id, "unsupported property kind, skipping");
            None
        }
    }
}

/// Resolution priority for trigger properties: a named handler, then a
/// dispatcher wrapper, then a callable member of the bind target's state.
fn resolve_trigger(actions: &Actions, id: &str, target: &BindTarget) -> Option<ActionFn> {
    if let Some(handler) = actions.resolve(id) {
        return Some(handler);
    }
    match target.member(id) {
        Some(StateValue::Action(handler)) => Some(handler),
        _ => None,
    }
}

fn number_widget(def: &NumberDef) -> FieldWidget {
    FieldWidget::Number {
        min: def.min,
        max: def.max,
        step: def.step,
    }
}

/// Label a leaf control and wire its commit through to the update handler.
fn leaf(mut control: Box<dyn Control>, label: &str, id: &str, update: &UpdateFn) -> Binding {
    control.set_label(label);
    let id = id.to_string();
    let update = update.clone();
    control.on_commit(Box::new(move |value| update(&id, value)));
    Binding {
        control: ControlHandle::Leaf(control),
        children: None,
    }
}

/// Commit callback for one xy axis: forwards a partial `{axis: value}`
/// map, never both fields at once. The caller's update handler is
/// responsible for merging.
fn axis_commit(id: &str, axis: &str, update: &UpdateFn) -> Box<dyn FnMut(StateValue)> {
    let id = id.to_string();
    let axis = axis.to_string();
    let update = update.clone();
    Box::new(move |value| {
        let mut partial = BTreeMap::new();
        partial.insert(axis.clone(), value);
        update(&id, StateValue::Map(partial));
    })
}
