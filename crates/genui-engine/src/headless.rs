//! # Headless Backend
//!
//! An in-memory rendering backend that records every scope, field, and
//! trigger it is asked to create, and can simulate the user committing an
//! edit: write the bound state member, then fire the stored commit
//! callback — exactly the write-on-edit contract a real widget adapter
//! fulfills.
//!
//! Used by this crate's own integration tests; public so adapter authors
//! can exercise the same scenarios against the traversal engine.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use genui_core::{invoke, ActionFn, SharedState, StateValue};

use crate::backend::{Backend, CommitFn, Control, FieldWidget, Scope};

/// What kind of control was recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedWidget {
    /// A leaf editor created through `add_field`.
    Field(FieldWidget),
    /// A color editor created through `add_color_field`.
    Color,
    /// A button created through `add_trigger`.
    Trigger,
}

/// One recorded control.
pub struct ControlRecord {
    /// Labels of the enclosing groups, outermost first.
    pub group: Vec<String>,
    /// Widget shape.
    pub widget: RecordedWidget,
    /// Bound state address for fields; the trigger key for triggers.
    pub path: Vec<String>,
    /// Current display label.
    pub label: String,
    state: Option<SharedState>,
    commit: Option<CommitFn>,
    trigger: Option<ActionFn>,
}

impl fmt::Debug for ControlRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlRecord")
            .field("group", &self.group)
            .field("widget", &self.widget)
            .field("path", &self.path)
            .field("label", &self.label)
            .finish()
    }
}

/// One recorded group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRecord {
    /// Labels of the enclosing groups, outermost first.
    pub parent: Vec<String>,
    pub label: String,
    pub expanded: bool,
}

#[derive(Default)]
struct Recorder {
    scopes_created: usize,
    controls: Vec<Rc<RefCell<ControlRecord>>>,
    groups: Vec<GroupRecord>,
}

/// Recording backend for tests and adapter development.
#[derive(Default)]
pub struct HeadlessBackend {
    recorder: Rc<RefCell<Recorder>>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many root scopes this backend has created.
    pub fn scopes_created(&self) -> usize {
        self.recorder.borrow().scopes_created
    }

    /// Total number of recorded controls.
    pub fn control_count(&self) -> usize {
        self.recorder.borrow().controls.len()
    }

    /// All recorded groups, in creation order.
    pub fn groups(&self) -> Vec<GroupRecord> {
        self.recorder.borrow().groups.clone()
    }

    /// The recorded group with the given label.
    pub fn group(&self, label: &str) -> Option<GroupRecord> {
        self.recorder
            .borrow()
            .groups
            .iter()
            .find(|g| g.label == label)
            .cloned()
    }

    /// Widget shape of the control bound at `path`.
    pub fn widget_at(&self, path: &[&str]) -> Option<RecordedWidget> {
        self.find(path).map(|r| r.borrow().widget.clone())
    }

    /// Display label of the control bound at `path`.
    pub fn label_at(&self, path: &[&str]) -> Option<String> {
        self.find(path).map(|r| r.borrow().label.clone())
    }

    /// True if a control is bound at `path`.
    pub fn has_control(&self, path: &[&str]) -> bool {
        self.find(path).is_some()
    }

    /// Simulate the user committing an edit on the control bound at
    /// `path`: write the bound state member, then fire the commit
    /// callback. Returns false when no such control exists.
    pub fn commit(&self, path: &[&str], value: StateValue) -> bool {
        let Some(record) = self.find(path) else {
            return false;
        };
        let mut callback = {
            let mut rec = record.borrow_mut();
            if let Some(state) = &rec.state {
                state.set_at(&rec.path, value.clone());
            }
            rec.commit.take()
        };
        if let Some(cb) = callback.as_mut() {
            cb(value);
        }
        // Controls survive multiple commits.
        record.borrow_mut().commit = callback;
        true
    }

    /// Simulate pressing the trigger registered under `key`. Returns
    /// false when no such trigger exists.
    pub fn fire_trigger(&self, key: &str) -> bool {
        let handler = self.find(&[key]).and_then(|record| {
            let rec = record.borrow();
            match rec.widget {
                RecordedWidget::Trigger => rec.trigger.clone(),
                _ => None,
            }
        });
        match handler {
            Some(handler) => {
                invoke(&handler);
                true
            }
            None => false,
        }
    }

    fn find(&self, path: &[&str]) -> Option<Rc<RefCell<ControlRecord>>> {
        self.recorder
            .borrow()
            .controls
            .iter()
            .find(|r| {
                let rec = r.borrow();
                rec.path.len() == path.len()
                    && rec.path.iter().zip(path.iter()).all(|(a, b)| a == b)
            })
            .cloned()
    }
}

impl Backend for HeadlessBackend {
    fn create_scope(&mut self) -> Box<dyn Scope> {
        let mut recorder = self.recorder.borrow_mut();
        recorder.scopes_created += 1;
        drop(recorder);
        Box::new(HeadlessScope {
            recorder: self.recorder.clone(),
            group: Vec::new(),
        })
    }
}

struct HeadlessScope {
    recorder: Rc<RefCell<Recorder>>,
    group: Vec<String>,
}

impl HeadlessScope {
    fn record(&self, record: ControlRecord) -> Box<dyn Control> {
        let record = Rc::new(RefCell::new(record));
        self.recorder.borrow_mut().controls.push(record.clone());
        Box::new(HeadlessControl { record })
    }
}

impl Scope for HeadlessScope {
    fn add_field(
        &mut self,
        state: SharedState,
        path: &[String],
        widget: FieldWidget,
    ) -> Box<dyn Control> {
        self.record(ControlRecord {
            group: self.group.clone(),
            widget: RecordedWidget::Field(widget),
            path: path.to_vec(),
            label: String::new(),
            state: Some(state),
            commit: None,
            trigger: None,
        })
    }

    fn add_color_field(&mut self, state: SharedState, path: &[String]) -> Box<dyn Control> {
        self.record(ControlRecord {
            group: self.group.clone(),
            widget: RecordedWidget::Color,
            path: path.to_vec(),
            label: String::new(),
            state: Some(state),
            commit: None,
            trigger: None,
        })
    }

    fn add_group(&mut self, label: &str, expanded: bool) -> Box<dyn Scope> {
        self.recorder.borrow_mut().groups.push(GroupRecord {
            parent: self.group.clone(),
            label: label.to_string(),
            expanded,
        });
        let mut group = self.group.clone();
        group.push(label.to_string());
        Box::new(HeadlessScope {
            recorder: self.recorder.clone(),
            group,
        })
    }

    fn add_trigger(&mut self, key: &str, action: ActionFn) -> Box<dyn Control> {
        self.record(ControlRecord {
            group: self.group.clone(),
            widget: RecordedWidget::Trigger,
            path: vec![key.to_string()],
            label: String::new(),
            state: None,
            commit: None,
            trigger: Some(action),
        })
    }
}

struct HeadlessControl {
    record: Rc<RefCell<ControlRecord>>,
}

impl Control for HeadlessControl {
    fn set_label(&mut self, text: &str) {
        self.record.borrow_mut().label = text.to_string();
    }

    fn on_commit(&mut self, callback: CommitFn) {
        self.record.borrow_mut().commit = Some(callback);
    }
}
