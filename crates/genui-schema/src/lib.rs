//! # genui-schema — Property Descriptor Data Model
//!
//! The declarative side of GenUI: typed property descriptors parsed from a
//! JSON schema document. A descriptor names a property, carries a
//! kind-specific `def` payload (bounds, choices, children, ...), and
//! optionally declares an explicit state address.
//!
//! ## Key Design Principles
//!
//! 1. **Closed sum over the open `kind` string.** `PropertyKind` is a
//!    tagged union; the dispatcher matches it exhaustively, so an unhandled
//!    kind is a compile error, not a silent fall-through. Kinds this crate
//!    does not recognize parse into `PropertyKind::Unknown` and degrade
//!    gracefully downstream.
//!
//! 2. **Descriptors are immutable schema data.** The engine never mutates
//!    them; all mutation happens in the state container.
//!
//! 3. **Identifier synonyms.** `property` and `name` are both accepted as
//!    the identifier, `property` preferred. The display label prefers
//!    `name`. A descriptor with neither fails identifier resolution with
//!    [`SchemaError::MissingIdentifier`].

pub mod descriptor;
pub mod document;
pub mod error;

pub use descriptor::{
    ChoiceDef, ChoiceEntry, NestDef, NumberDef, PropertyDescriptor, PropertyKind, TextDef,
    ToggleDef, XyDef,
};
pub use document::Document;
pub use error::SchemaError;
