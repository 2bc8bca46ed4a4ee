//! # Panel — Render Entry Point
//!
//! Ties the pieces together: create a root scope on the backend, walk the
//! document's root descriptors, and hand the caller an owned panel holding
//! the root rendering handle and the binding tree. The binding tree is
//! rebuilt on every render and owns no state; drop the panel to tear the
//! render down.

use genui_core::SharedState;
use genui_schema::Document;

use crate::actions::Actions;
use crate::backend::{Backend, Scope, UpdateFn};
use crate::dispatch::BindTarget;
use crate::walk::{walk, Binding, BindingMap};

/// One rendered control panel.
pub struct Panel {
    root: Box<dyn Scope>,
    bindings: BindingMap,
}

impl Panel {
    /// Render `document` into a fresh panel.
    ///
    /// Materializes each descriptor's default into `state`, creates the
    /// controls through `backend`, and registers `update` as the commit
    /// sink. Resolution failures degrade by omission; this never fails.
    pub fn render(
        backend: &mut dyn Backend,
        document: &Document,
        state: SharedState,
        actions: Actions,
        update: UpdateFn,
    ) -> Self {
        match &document.version {
            Some(version) => {
                tracing::debug!(version = %version, properties = document.root.len(), "rendering schema document");
            }
            None => {
                tracing::debug!(properties = document.root.len(), "rendering unversioned schema document");
            }
        }

        let mut root = backend.create_scope();
        let target = BindTarget::root(state);
        let bindings = walk(root.as_mut(), &document.root, &target, &actions, &update);
        Self { root, bindings }
    }

    /// The binding tree produced by this render pass.
    pub fn bindings(&self) -> &BindingMap {
        &self.bindings
    }

    /// Look up a root-level binding by property identifier.
    pub fn binding(&self, id: &str) -> Option<&Binding> {
        self.bindings.get(id)
    }

    /// The root rendering-library handle.
    pub fn root_scope(&self) -> &dyn Scope {
        self.root.as_ref()
    }

    /// Mutable access to the root rendering-library handle.
    pub fn root_scope_mut(&mut self) -> &mut dyn Scope {
        self.root.as_mut()
    }
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panel")
            .field("bindings", &self.bindings.keys().collect::<Vec<_>>())
            .finish()
    }
}
