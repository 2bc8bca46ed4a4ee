//! # genui-engine — Schema Traversal and State Synchronization
//!
//! The core of GenUI: the recursive walk over a property-descriptor tree
//! that materializes defaults into the state container, builds a parallel
//! tree of control bindings through a replaceable rendering backend,
//! forwards commit notifications to the caller's update handler, and
//! converts bidirectionally between state and serialized snapshots.
//!
//! ## Key Design Principles
//!
//! 1. **Resolution failures degrade by omission.** A property whose action
//!    handler is missing, whose kind is unknown, or which has no identifier
//!    is reported on the `tracing` warn channel and simply does not appear
//!    in the panel or the binding tree. Nothing propagates out of the
//!    walker for these.
//!
//! 2. **The backend is a seam.** Widget libraries are adapters behind the
//!    [`backend`] traits; the traversal logic never names a concrete
//!    toolkit. A headless recording backend ships in [`headless`] for
//!    tests and adapter authors.
//!
//! 3. **Commits are edge-triggered.** Controls notify on "finished
//!    editing" only; the engine does not coalesce or debounce.
//!
//! 4. **No global registry.** A [`Panel`] owns its root scope and binding
//!    tree; callers pass it around explicitly.

pub mod actions;
pub mod backend;
pub mod dispatch;
pub mod headless;
pub mod panel;
pub mod sync;
pub mod walk;

pub use actions::Actions;
pub use backend::{Backend, CommitFn, Control, FieldWidget, Scope, SelectOption, UpdateFn};
pub use dispatch::{dispatch, BindTarget};
pub use panel::Panel;
pub use sync::{restore, snapshot, snapshot_into, AddressMode};
pub use walk::{walk, Binding, BindingMap, ControlHandle};
