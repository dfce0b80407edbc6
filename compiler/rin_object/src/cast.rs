//! Casts from a dynamic `Value` to a statically known kind.
//!
//! A checked cast tests the value's runtime type against the kind's type
//! with the subclass relation and either yields a `Typed<K>` or fails with
//! `InvalidCast`; it never hands back a wrongly typed reference. An
//! unchecked cast skips the test and is for call sites that already
//! established the type, such as method bodies whose receiver and
//! arguments were validated by the call protocol.
//!
//! ```text
//! let n = cast::<kind::Int>(&value)?.raw();
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use rin_ir::TypeId;

use crate::errors::{invalid_cast, EvalError};
use crate::function::FunctionValue;
use crate::types::TypeIdExt;
use crate::value::{Payload, ScalarCell, Value};

/// Statically known runtime type a value can be cast to.
pub trait Kind {
    const TYPE: TypeId;
}

/// Marker types for the built-in kinds.
pub mod kind {
    use super::Kind;
    use rin_ir::TypeId;

    macro_rules! define_kinds {
        ($($(#[$meta:meta])* $name:ident => $ty:ident,)*) => {
            $(
                $(#[$meta])*
                #[derive(Debug)]
                pub enum $name {}

                impl Kind for $name {
                    const TYPE: TypeId = TypeId::$ty;
                }
            )*
        };
    }

    define_kinds! {
        /// Any value.
        Object => OBJECT,
        Type => TYPE,
        Function => FUNCTION,
        NoneType => NONE,
        Bool => BOOL,
        Int => INT,
        Float => FLOAT,
        Str => STR,
    }
}

/// A value whose runtime type is known to be `K` or a subtype of it.
pub struct Typed<K: Kind> {
    value: Value,
    kind: PhantomData<fn() -> K>,
}

impl<K: Kind> Typed<K> {
    fn new(value: Value) -> Self {
        Typed {
            value,
            kind: PhantomData,
        }
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl<K: Kind> Deref for Typed<K> {
    type Target = Value;

    #[inline]
    fn deref(&self) -> &Value {
        &self.value
    }
}

impl<K: Kind> Clone for Typed<K> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<K: Kind> fmt::Debug for Typed<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

/// Checked cast: succeeds iff the value's runtime type is a subclass of
/// `K`'s type.
pub fn cast<K: Kind>(value: &Value) -> Result<Typed<K>, EvalError> {
    let ty = value.type_id();
    if ty.is_subclass(K::TYPE) {
        Ok(Typed::new(value.clone()))
    } else {
        Err(invalid_cast(ty.name(), K::TYPE.name()))
    }
}

/// Unchecked cast. The caller guarantees the value is a `K`.
///
/// Debug builds still verify the guarantee. Accessing the payload of a
/// wrongly cast value panics.
#[inline]
pub fn cast_unchecked<K: Kind>(value: &Value) -> Typed<K> {
    debug_assert!(
        value.type_id().is_subclass(K::TYPE),
        "unchecked cast of {} to {}",
        value.type_name(),
        K::TYPE.name()
    );
    Typed::new(value.clone())
}

#[cold]
#[track_caller]
fn payload_mismatch(expected: &str, value: &Value) -> ! {
    panic!(
        "internal error: {} value cast to {expected} has payload {:?}",
        value.type_name(),
        value.payload()
    )
}

impl Typed<kind::Bool> {
    pub fn raw(&self) -> bool {
        match self.value.payload() {
            Payload::Bool(b) => *b,
            _ => payload_mismatch("Bool", &self.value),
        }
    }
}

impl Typed<kind::Int> {
    pub fn cell(&self) -> &ScalarCell<i64> {
        match self.value.payload() {
            Payload::Int(cell) => cell,
            _ => payload_mismatch("Int", &self.value),
        }
    }

    #[inline]
    pub fn raw(&self) -> i64 {
        self.cell().get()
    }

    /// Overwrite the scalar in place; every holder observes the change.
    pub fn set(&self, n: i64) {
        self.cell().set(n);
    }
}

impl Typed<kind::Float> {
    pub fn cell(&self) -> &ScalarCell<f64> {
        match self.value.payload() {
            Payload::Float(cell) => cell,
            _ => payload_mismatch("Float", &self.value),
        }
    }

    #[inline]
    pub fn raw(&self) -> f64 {
        self.cell().get()
    }

    /// Overwrite the scalar in place; every holder observes the change.
    pub fn set(&self, f: f64) {
        self.cell().set(f);
    }
}

impl Typed<kind::Str> {
    pub fn cell(&self) -> &ScalarCell<String> {
        match self.value.payload() {
            Payload::Str(cell) => cell,
            _ => payload_mismatch("Str", &self.value),
        }
    }

    /// Copy of the current text.
    pub fn text(&self) -> String {
        self.cell().with(String::clone)
    }

    /// Overwrite the text in place; every holder observes the change.
    pub fn set(&self, s: impl Into<String>) {
        self.cell().set(s.into());
    }
}

impl Typed<kind::Function> {
    pub fn function(&self) -> &FunctionValue {
        match self.value.payload() {
            Payload::Function(function) => function,
            _ => payload_mismatch("Function", &self.value),
        }
    }
}

impl Typed<kind::Type> {
    /// The type this type object stands for.
    pub fn target(&self) -> TypeId {
        match self.value.payload() {
            Payload::Type(ty) => *ty,
            _ => payload_mismatch("Type", &self.value),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
