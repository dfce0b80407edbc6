//! Rin Object - the object system underlying the rin scripting runtime.
//!
//! This crate provides:
//! - Runtime values (`Value`, `Payload`) with shared reference counting
//! - The process-wide type registry with single-inheritance subclass tests
//! - Function values and the call protocol (arity and argument type checks)
//! - Per-type member tables and the generic operator dispatch entry points
//! - Checked and unchecked casts to statically known kinds
//! - The None/True/False singletons and the built-in scalar types
//!
//! # Architecture
//!
//! Every operator is data-driven: the evaluator calls one generic entry
//! point (`evaluate_binary`, `evaluate_unary`, `call`, ...) which resolves a
//! conventional member name in the receiver type's method table and invokes
//! the bound method with the remaining operands. New types plug in by
//! declaring themselves in the registry and installing a table; the
//! dispatch core never changes.
//!
//! Method tables are shared per type rather than copied into every value;
//! only the native scalar of each value is per-instance state.

mod builtins;
mod cast;
mod dispatch;
mod errors;
mod function;
mod singletons;
mod table;
mod types;
mod value;

pub use cast::{cast, cast_unchecked, kind, Kind, Typed};
pub use dispatch::{
    call, call_method, call_method_named, construct, evaluate_assign, evaluate_binary,
    evaluate_unary, get_member, to_display_string,
};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use function::{FunctionValue, NativeFn};
pub use table::{Member, Method, MethodFn, MethodTable};
pub use types::{registry, TypeDef, TypeIdExt, TypeRegistry};
pub use value::{format_float, Payload, ScalarCell, Value};

// Re-export error constructors for use by other crates
pub use errors::{
    argument_type_mismatch, arity_mismatch, division_by_zero, duplicate_type, integer_overflow,
    invalid_cast, io_error, method_not_found, modulo_by_zero, not_callable, unimplemented_feature,
    unsupported_operator,
};

// Re-export the shared vocabulary so embedders need a single dependency
pub use rin_ir::{member, names, AssignOp, BinaryOp, Name, TypeId, UnaryOp};
