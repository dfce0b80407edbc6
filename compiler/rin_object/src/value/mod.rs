//! Runtime values.
//!
//! A `Value` is a cheap handle to a shared `Object`: cloning bumps a
//! reference count and every clone observes the same object. An object is
//! released when its last handle is dropped.
//!
//! # Allocation
//!
//! All objects are created through the factory methods on `Value`. The
//! `Heap<T>` wrapper has a `pub(super)` constructor, so code outside this
//! module cannot allocate objects directly.
//!
//! ```text
//! let s = Value::string("hello");   // OK
//! let t = Value::bool(true);        // OK, shared singleton
//! ```
//!
//! # Payloads
//!
//! Behavior lives in the per-type method tables of the registry. An object
//! only carries its `TypeId` and a `Payload`, the closed set of native
//! representations. Int, Float and Str wrap their scalar in a
//! `ScalarCell` so the compound assignment members can mutate it in place.

mod heap;
mod scalar;

use std::fmt;

use rin_ir::TypeId;

use crate::errors::{invalid_cast, EvalResult};
use crate::function::FunctionValue;
use crate::singletons;
use crate::types::TypeIdExt;

use heap::Heap;
pub use scalar::ScalarCell;

/// Native representation carried by an object.
#[derive(Clone, Debug)]
pub enum Payload {
    None,
    Bool(bool),
    Int(ScalarCell<i64>),
    Float(ScalarCell<f64>),
    Str(ScalarCell<String>),
    Function(FunctionValue),
    /// A first-class type object.
    Type(TypeId),
    /// Instance of a declared type without a native scalar.
    Plain,
}

/// A runtime object: its type plus its native payload.
struct Object {
    ty: TypeId,
    payload: Payload,
}

/// Handle to a shared runtime object.
#[derive(Clone)]
pub struct Value(Heap<Object>);

impl Value {
    pub(crate) fn with_payload(ty: TypeId, payload: Payload) -> Self {
        Value(Heap::new(Object { ty, payload }))
    }

    // Factory methods

    /// The shared None instance.
    #[inline]
    pub fn none() -> Self {
        singletons::none().clone()
    }

    /// The shared True or False instance. Never allocates.
    #[inline]
    pub fn bool(b: bool) -> Self {
        if b {
            singletons::true_value().clone()
        } else {
            singletons::false_value().clone()
        }
    }

    pub fn int(n: i64) -> Self {
        Self::with_payload(TypeId::INT, Payload::Int(ScalarCell::new(n)))
    }

    pub fn float(f: f64) -> Self {
        Self::with_payload(TypeId::FLOAT, Payload::Float(ScalarCell::new(f)))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::with_payload(TypeId::STR, Payload::Str(ScalarCell::new(s.into())))
    }

    pub fn function(function: FunctionValue) -> Self {
        Self::with_payload(TypeId::FUNCTION, Payload::Function(function))
    }

    /// First-class object for a registered type.
    pub fn type_object(ty: TypeId) -> Self {
        Self::with_payload(TypeId::TYPE, Payload::Type(ty))
    }

    // Accessors

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.0.ty
    }

    /// Registered name of this value's runtime type.
    pub fn type_name(&self) -> &'static str {
        self.type_id().name()
    }

    #[inline]
    pub fn payload(&self) -> &Payload {
        &self.0.payload
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self.payload(), Payload::None)
    }

    /// Identity comparison: whether both handles refer to the same object.
    #[inline]
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Heap::ptr_eq(&self.0, &other.0)
    }

    /// Re-tag a snapshot of this value as `ty`, which must be a registered
    /// subtype of the value's current type.
    ///
    /// Specializing to the value's own type returns the same object.
    pub fn specialize(&self, ty: TypeId) -> EvalResult {
        let current = self.type_id();
        if ty == current {
            return Ok(self.clone());
        }
        if !ty.is_subclass(current) {
            return Err(invalid_cast(current.name(), ty.name()));
        }
        Ok(Self::with_payload(ty, self.payload().clone()))
    }
}

/// Render a float with six fractional digits, spelling out the
/// non-finite values.
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f.is_infinite() {
        String::from(if f > 0.0 { "inf" } else { "-inf" })
    } else {
        format!("{f:.6}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Payload::None => write!(f, "none"),
            Payload::Bool(b) => write!(f, "{b}"),
            Payload::Int(n) => write!(f, "{}", n.get()),
            Payload::Float(x) => write!(f, "{}", format_float(x.get())),
            Payload::Str(s) => s.with(|s| f.write_str(s)),
            Payload::Function(func) => write!(f, "{func}"),
            Payload::Type(ty) => f.write_str(ty.name()),
            Payload::Plain => write!(f, "<{} object>", self.type_name()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Payload::None => write!(f, "None"),
            Payload::Bool(b) => write!(f, "Bool({b})"),
            Payload::Int(n) => write!(f, "Int({})", n.get()),
            Payload::Float(x) => write!(f, "Float({})", x.get()),
            Payload::Str(s) => s.with(|s| write!(f, "Str({s:?})")),
            Payload::Function(func) => write!(f, "Function({func})"),
            Payload::Type(ty) => write!(f, "Type({})", ty.name()),
            Payload::Plain => write!(f, "Plain({})", self.type_name()),
        }
    }
}

/// Structural equality: same runtime type and equal payload.
///
/// Functions and plain objects compare by identity. Floats follow IEEE
/// rules, so a NaN is never equal to itself.
impl PartialEq for Value {
    #[allow(clippy::float_cmp, reason = "Float payloads compare with IEEE semantics")]
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return !matches!(self.payload(), Payload::Float(x) if x.get().is_nan());
        }
        if self.type_id() != other.type_id() {
            return false;
        }
        match (self.payload(), other.payload()) {
            (Payload::None, Payload::None) => true,
            (Payload::Bool(a), Payload::Bool(b)) => a == b,
            (Payload::Int(a), Payload::Int(b)) => a.get() == b.get(),
            (Payload::Float(a), Payload::Float(b)) => a.get() == b.get(),
            (Payload::Str(a), Payload::Str(b)) => a.with(|a| b.with(|b| a == b)),
            (Payload::Function(a), Payload::Function(b)) => a.ptr_eq(b),
            (Payload::Type(a), Payload::Type(b)) => a == b,
            _ => false,
        }
    }
}
