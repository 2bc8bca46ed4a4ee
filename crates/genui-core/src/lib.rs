//! # genui-core — Foundational Types for GenUI
//!
//! This crate is the bedrock of the GenUI panel engine. It defines the
//! generic value tree that backs every panel's mutable state, and the
//! address-based get/set utility used to read and write arbitrarily nested
//! values. Every other crate in the workspace depends on `genui-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One value tree, independent of the descriptor model.** `StateValue`
//!    is a plain tree-of-maps value. Nothing in this crate knows what a
//!    property descriptor is — schema concerns live in `genui-schema`.
//!
//! 2. **Explicit create-missing-intermediate semantics.** `assign_at`
//!    creates intermediate `Map` levels on write rather than failing.
//!    Reads through `value_at` never allocate.
//!
//! 3. **Callable state members.** `StateValue::Action` lets a state map
//!    carry zero-argument callables, so an action property can resolve
//!    against state when no actions collaborator is supplied.
//!
//! 4. **Single-threaded sharing.** `SharedState` is an `Rc<RefCell<..>>`
//!    newtype. The engine and live controls both write it, but never
//!    concurrently — commits happen one event-loop turn at a time.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `genui-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod path;
pub mod state;
pub mod value;

pub use path::{assign_at, value_at};
pub use state::SharedState;
pub use value::{action, invoke, ActionFn, StateValue};
