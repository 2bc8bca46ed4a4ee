//! # Actions Collaborator
//!
//! The caller supplies action handlers in one of three shapes, modeled as
//! a tagged variant instead of a polymorphic parameter: a map of named
//! zero-argument handlers, a single dispatcher callable receiving the
//! property identifier, or nothing at all (in which case trigger
//! properties may still resolve against callable state members).

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use genui_core::{action, ActionFn};

/// Handlers for trigger properties.
#[derive(Clone, Default)]
pub enum Actions {
    /// Named zero-argument handlers keyed by property identifier.
    Handlers(BTreeMap<String, ActionFn>),
    /// A single callable invoked with the property identifier.
    Dispatcher(Rc<dyn Fn(&str)>),
    /// No actions collaborator.
    #[default]
    None,
}

impl Actions {
    /// Build a `Handlers` collection from `(identifier, handler)` pairs.
    pub fn handlers<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, ActionFn)>,
    {
        Self::Handlers(pairs.into_iter().collect())
    }

    /// Build a `Dispatcher` from a callable.
    pub fn dispatcher<F: Fn(&str) + 'static>(f: F) -> Self {
        Self::Dispatcher(Rc::new(f))
    }

    /// Resolve a handler for `id` from this collaborator alone.
    ///
    /// `Handlers` yields the named member if present; `Dispatcher`
    /// synthesizes a zero-argument wrapper that invokes the dispatcher
    /// with `id`. `None` — and a `Handlers` map without the member —
    /// yield nothing here; the dispatcher then consults the bind target's
    /// state for a callable member as the final fallback.
    pub fn resolve(&self, id: &str) -> Option<ActionFn> {
        match self {
            Self::Handlers(map) => map.get(id).cloned(),
            Self::Dispatcher(dispatch) => {
                let dispatch = dispatch.clone();
                let id = id.to_string();
                Some(action(move || dispatch(&id)))
            }
            Self::None => None,
        }
    }
}

impl fmt::Debug for Actions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handlers(map) => f
                .debug_tuple("Handlers")
                .field(&map.keys().collect::<Vec<_>>())
                .finish(),
            Self::Dispatcher(_) => write!(f, "Dispatcher(..)"),
            Self::None => write!(f, "None"),
        }
    }
}
