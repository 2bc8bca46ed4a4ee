//! # Rendering Backend Contract
//!
//! The capability a concrete widget library must provide: create a leaf
//! control bound to an address inside the shared state, create a labeled
//! grouping scope, and invoke a callback when a value edit is committed.
//! Adapters are swapped out entirely across deployments; nothing in the
//! traversal logic depends on a concrete toolkit.
//!
//! A backend owns the write-on-edit half of the loop: when the user
//! finishes editing a control, the backend writes the bound state member
//! and then fires the control's commit callback with the committed value.
//! Commit notification is edge-triggered on "finished editing", never on
//! intermediate changes.

use std::rc::Rc;

use genui_core::{ActionFn, SharedState, StateValue};

/// Callback fired by a control when an edit is committed.
pub type CommitFn = Box<dyn FnMut(StateValue)>;

/// The caller's update collaborator: invoked as `(identifier, value)` on
/// every commit. The caller owns all resulting side effects.
pub type UpdateFn = Rc<dyn Fn(&str, StateValue)>;

/// One selectable option of a select widget. The optional label is
/// display-only; the committed value is always `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub label: Option<String>,
    pub value: StateValue,
}

/// What kind of leaf editor a field control should present.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldWidget {
    /// Free-form string editor.
    Text,
    /// Boolean editor.
    Toggle,
    /// Bounded numeric editor. Absent bounds leave the editor unbounded.
    Number {
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    },
    /// Enumeration editor over a fixed option list.
    Select { options: Vec<SelectOption> },
}

/// An opaque handle to one live control.
pub trait Control {
    /// Set the display label.
    fn set_label(&mut self, text: &str);

    /// Register the commit callback. Called at most once per control.
    fn on_commit(&mut self, callback: CommitFn);
}

/// A rendering scope: the top-level panel or a labeled group inside it.
pub trait Scope {
    /// Create a leaf control bound to `path` inside `state`.
    fn add_field(
        &mut self,
        state: SharedState,
        path: &[String],
        widget: FieldWidget,
    ) -> Box<dyn Control>;

    /// Create a color editor bound to `path` inside `state`.
    fn add_color_field(&mut self, state: SharedState, path: &[String]) -> Box<dyn Control>;

    /// Create a labeled sub-scope, initially open or closed.
    fn add_group(&mut self, label: &str, expanded: bool) -> Box<dyn Scope>;

    /// Create a button that invokes `action` when pressed. Triggers bind
    /// to callables, not to state.
    fn add_trigger(&mut self, key: &str, action: ActionFn) -> Box<dyn Control>;
}

/// A widget-library adapter.
pub trait Backend {
    /// Create the root scope for one render pass.
    fn create_scope(&mut self) -> Box<dyn Scope>;
}
