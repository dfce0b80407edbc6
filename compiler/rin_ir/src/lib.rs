//! Rin IR - shared vocabulary for the rin object runtime.
//!
//! This crate provides the small, dependency-light pieces every other
//! runtime crate agrees on:
//! - `Name`: interned 32-bit identifiers for member and type names
//! - `StringInterner`: sharded interner, with one process-wide instance
//!   reachable through [`names()`]
//! - `TypeId`: compact handle for a registered runtime type, with the
//!   built-in types pre-assigned
//! - `UnaryOp`, `BinaryOp`, `AssignOp`: the operator vocabulary and the
//!   conventional member name each operator resolves to

mod interner;
mod name;
mod operators;
mod type_id;

pub use interner::{names, StringInterner};
pub use name::Name;
pub use operators::{member, AssignOp, BinaryOp, UnaryOp};
pub use type_id::TypeId;
