//! # Tree Walker
//!
//! Applies the property dispatcher across an ordered descriptor sequence
//! (the schema's root, or any nesting's children), assembling the non-null
//! results into a mapping keyed by property identifier. Descriptors whose
//! dispatch resolved to nothing are simply absent from the mapping; that
//! is not an error.

use std::collections::BTreeMap;
use std::fmt;

use genui_schema::PropertyDescriptor;

use crate::actions::Actions;
use crate::backend::{Control, Scope, UpdateFn};
use crate::dispatch::{dispatch, BindTarget};

/// Handle to the rendered widget behind a binding: a leaf control, or the
/// grouping scope created for `nest` and `xy` properties.
pub enum ControlHandle {
    Leaf(Box<dyn Control>),
    Group(Box<dyn Scope>),
}

impl ControlHandle {
    /// The leaf control, if this binding is a leaf.
    pub fn as_leaf(&self) -> Option<&dyn Control> {
        match self {
            Self::Leaf(control) => Some(control.as_ref()),
            Self::Group(_) => None,
        }
    }

    /// The grouping scope, if this binding is a group.
    pub fn as_group(&self) -> Option<&dyn Scope> {
        match self {
            Self::Leaf(_) => None,
            Self::Group(scope) => Some(scope.as_ref()),
        }
    }
}

impl fmt::Debug for ControlHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(_) => write!(f, "Leaf(..)"),
            Self::Group(_) => write!(f, "Group(..)"),
        }
    }
}

/// One entry of the binding tree. `children` is present only for `nest`
/// and `xy` bindings and recurses the same shape.
#[derive(Debug)]
pub struct Binding {
    pub control: ControlHandle,
    pub children: Option<BindingMap>,
}

/// Binding tree level: property identifier to binding. Identifiers are
/// unique among siblings; nesting provides disambiguating scope.
pub type BindingMap = BTreeMap<String, Binding>;

/// Dispatch each descriptor in order (order determines display order) and
/// collect the resulting bindings.
pub fn walk(
    scope: &mut dyn Scope,
    descriptors: &[PropertyDescriptor],
    target: &BindTarget,
    actions: &Actions,
    update: &UpdateFn,
) -> BindingMap {
    let mut bindings = BindingMap::new();
    for descriptor in descriptors {
        if let Some((id, binding)) = dispatch(scope, descriptor, target, actions, update) {
            bindings.insert(id, binding);
        }
    }
    bindings
}
